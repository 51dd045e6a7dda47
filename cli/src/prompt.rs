//! Line-based prompts for the interactive wizards.

use std::io::{self, BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask once; returns the trimmed answer.
    ///
    /// Closed input is an `UnexpectedEof` error.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_owned())
    }

    /// Ask with a default shown in brackets; an empty answer keeps it.
    pub fn ask_or(&mut self, label: &str, current: &str) -> io::Result<String> {
        if current.is_empty() {
            return self.ask(label);
        }
        let answer = self.ask(&format!("{label} [{current}]"))?;
        Ok(if answer.is_empty() { current.to_owned() } else { answer })
    }

    /// `y`/`ya`/`yes` (any case) is yes; anything else is no.
    pub fn confirm(&mut self, label: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{label} (y/n)"))?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "ya" | "yes"))
    }

    /// Pick one of `options` by number or by exact name.
    pub fn choose(&mut self, label: &str, options: &[String], current: &str) -> io::Result<String> {
        for (index, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}. {option}", index + 1)?;
        }
        let answer = self.ask_or(label, current)?;
        let picked = answer
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
            .cloned();
        Ok(picked.unwrap_or(answer))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn ask_or_keeps_default_on_empty_answer() {
        let mut p = prompter("\nBandung\n");
        assert_eq!(p.ask_or("Tahun lulus", "2024").unwrap(), "2024");
        assert_eq!(p.ask_or("Kota", "Jakarta").unwrap(), "Bandung");
    }

    #[test]
    fn confirm_accepts_indonesian_yes() {
        let mut p = prompter("Ya\nn\n");
        assert!(p.confirm("Setuju").unwrap());
        assert!(!p.confirm("Setuju").unwrap());
    }

    #[test]
    fn choose_by_number_or_name() {
        let options = vec!["IPA".to_owned(), "IPS".to_owned()];
        let mut p = prompter("2\nBahasa\n9\n");
        assert_eq!(p.choose("Program", &options, "IPA").unwrap(), "IPS");
        assert_eq!(p.choose("Program", &options, "IPA").unwrap(), "Bahasa");
        assert_eq!(p.choose("Program", &options, "IPA").unwrap(), "9");
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut p = prompter("");
        let error = p.ask("Nama").unwrap_err();
        assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
    }
}
