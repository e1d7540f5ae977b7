use std::io::{self, BufRead, Lines, Write};

/// Interactive input, one line at a time.
/// Each item is a complete source handed to its own scanner, nothing carries over between lines.
/// Strings can't span lines here, an open quote at the end of a line is reported as unterminated.
pub struct Prompt<R: BufRead, W: Write> {
    lines: Lines<R>,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Prompt<R, W> {
        Prompt {
            lines: reader.lines(),
            writer,
        }
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.writer, "> ")?;
        self.writer.flush()
    }
}

impl<R: BufRead, W: Write> Iterator for Prompt<R, W> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(error) = self.prompt() {
            return Some(Err(error));
        }
        // stdin closed (CTRL+D) ends the session
        self.lines.next()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::repl::Prompt;

    #[test]
    fn test_prompt_yields_lines() {
        let mut output: Vec<u8> = vec![];
        let lines: Vec<String> = Prompt::new(Cursor::new("print 1;\nvar a;\n"), &mut output)
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["print 1;".to_string(), "var a;".to_string()]);
        // one prompt per line read plus the one answered by end of input
        assert_eq!(String::from_utf8(output).unwrap(), "> > > ");
    }

    #[test]
    fn test_prompt_last_line_without_newline() {
        let lines: Vec<String> = Prompt::new(Cursor::new("a\nb"), Vec::<u8>::new())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_prompt_empty_input() {
        let mut prompt = Prompt::new(Cursor::new(""), Vec::<u8>::new());
        assert!(prompt.next().is_none());
    }
}
