use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A DOM event listener that is removed again when the value is dropped.
///
/// Create one inside a `use_effect_with_deps` and drop it from the effect's
/// destructor, so the listener lives exactly as long as the component.
pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventSubscription {
    pub fn new<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Self
    where
        E: JsCast,
        F: FnMut(E) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |event: Event| {
            if let Ok(event) = event.dyn_into::<E>() {
                handler(event);
            }
        }) as Box<dyn FnMut(Event)>);

        if let Err(err) =
            target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        {
            warn!("Failed to listen for {}: {:?}", event, err);
        }

        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            warn!("Failed to stop listening for {}: {:?}", self.event, err);
        }
    }
}
