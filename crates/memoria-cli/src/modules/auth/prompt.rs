use crate::{prompt_line, prompt_password};

/// Line-oriented input for the interactive form. `None` means the input
/// stream ended.
pub(crate) trait FormInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
    fn read_secret(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

pub(crate) struct TerminalInput;

impl FormInput for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        prompt_line(prompt)
    }

    fn read_secret(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        prompt_password(prompt)
    }
}

#[cfg(test)]
pub(crate) struct ScriptedInput {
    lines: std::collections::VecDeque<String>,
}

#[cfg(test)]
impl ScriptedInput {
    pub(crate) fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
        }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
impl FormInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }

    fn read_secret(&mut self, _prompt: &str) -> anyhow::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
