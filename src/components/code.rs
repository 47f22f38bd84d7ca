use yew::prelude::*;

const KEYWORDS: [&str; 7] = ["from", "import", "client", "model", "messages", "role", "content"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine<'a> {
    pub number: Option<&'a str>,
    pub code: &'a str,
}

impl<'a> CodeLine<'a> {
    /// Splits `"3 reply = client.chat("` into its line number and code.
    /// Lines without a leading number followed by whitespace are kept whole.
    pub fn parse(line: &'a str) -> Self {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        let followed_by_space = line[digits..].starts_with(char::is_whitespace);

        if digits > 0 && followed_by_space {
            CodeLine {
                number: Some(&line[..digits]),
                code: line[digits..].trim(),
            }
        } else {
            CodeLine { number: None, code: line }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Plain(&'a str),
    Keyword(&'a str),
    Str(&'a str),
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn push_plain<'a>(tokens: &mut Vec<Token<'a>>, text: &'a str) {
    if !text.is_empty() {
        tokens.push(Token::Plain(text));
    }
}

/// Double-quoted strings and whole-word keywords; everything else is plain.
/// An unterminated quote leaves the rest of the line plain.
pub fn highlight(code: &str) -> Vec<Token<'_>> {
    let bytes = code.as_bytes();
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'"' {
            match code[i + 1..].find('"') {
                Some(close) => {
                    let end = i + 1 + close + 1;
                    push_plain(&mut tokens, &code[plain_start..i]);
                    tokens.push(Token::Str(&code[i..end]));
                    i = end;
                    plain_start = end;
                    continue;
                }
                None => break,
            }
        }

        if is_word(bytes[i]) {
            let start = i;
            while i < bytes.len() && is_word(bytes[i]) {
                i += 1;
            }
            let word = &code[start..i];
            if KEYWORDS.contains(&word) {
                push_plain(&mut tokens, &code[plain_start..start]);
                tokens.push(Token::Keyword(word));
                plain_start = i;
            }
            continue;
        }

        i += 1;
    }

    push_plain(&mut tokens, &code[plain_start..]);
    tokens
}

#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub lang: &'static str,
    pub code: &'static str,
}

#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let lines = props.code.lines().map(|raw| {
        let line = CodeLine::parse(raw);
        let tokens = highlight(line.code).into_iter().map(|token| match token {
            Token::Plain(text) => html! { {text} },
            Token::Keyword(text) => html! { <span class="code-keyword">{text}</span> },
            Token::Str(text) => html! { <span class="code-string">{text}</span> },
        });
        html! {
            <div class="code-line">
                <span class="code-line-number">{line.number.unwrap_or_default()}</span>
                <span class="code-line-text">{ for tokens }</span>
            </div>
        }
    });

    html! {
        <div class="code-snippet">
            <pre><code class={format!("language-{}", props.lang)}>{ for lines }</code></pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_line_numbers() {
        let line = CodeLine::parse("1 from webspaceai import Client");
        assert_eq!(line.number, Some("1"));
        assert_eq!(line.code, "from webspaceai import Client");

        let line = CodeLine::parse("12   model=\"one\",  ");
        assert_eq!(line.number, Some("12"));
        assert_eq!(line.code, "model=\"one\",");
    }

    #[test]
    fn lines_without_numbers_are_kept_whole() {
        assert_eq!(CodeLine::parse(")"), CodeLine { number: None, code: ")" });
        assert_eq!(CodeLine::parse("42"), CodeLine { number: None, code: "42" });
        assert_eq!(CodeLine::parse("3d model"), CodeLine { number: None, code: "3d model" });
    }

    #[test]
    fn highlights_keywords_as_whole_words() {
        assert_eq!(
            highlight("from webspaceai import Client"),
            vec![
                Token::Keyword("from"),
                Token::Plain(" webspaceai "),
                Token::Keyword("import"),
                Token::Plain(" Client"),
            ]
        );
        assert_eq!(highlight("imports models"), vec![Token::Plain("imports models")]);
    }

    #[test]
    fn strings_take_precedence_over_keywords() {
        assert_eq!(
            highlight("{\"role\": \"user\"}"),
            vec![
                Token::Plain("{"),
                Token::Str("\"role\""),
                Token::Plain(": "),
                Token::Str("\"user\""),
                Token::Plain("}"),
            ]
        );
    }

    #[test]
    fn unterminated_string_is_plain() {
        assert_eq!(
            highlight("model=\"one"),
            vec![Token::Keyword("model"), Token::Plain("=\"one")]
        );
    }

    #[test]
    fn empty_line_has_no_tokens() {
        assert!(highlight("").is_empty());
    }
}
