//! System prompt variants for quick experiments

/// Base prompt: Muze concepts plus worked chart examples
pub const SYSTEM_PROMPT: &str = include_str!("system_prompt.txt");

const FORMATTING_INSTRUCTION: &str = "Additional instruction: Format your code with proper indentation and add detailed comments explaining each section.";

const BAR_CHARTS_INSTRUCTION: &str = "Additional instruction: When the user asks for a visualization without specifying the chart type, prefer bar charts as they are most effective for comparing values across categories.";

/// Named prompt variants with a selected current one
#[derive(Clone, Debug)]
pub struct PromptCatalog {
    prompts: Vec<(String, String)>,
    current: usize,
}

impl Default for PromptCatalog {
    fn default() -> Self {
        let with_instruction = |instruction: &str| format!("{}\n\n{}", SYSTEM_PROMPT, instruction);
        Self {
            prompts: vec![
                ("default".to_string(), SYSTEM_PROMPT.to_string()),
                ("formatting".to_string(), with_instruction(FORMATTING_INSTRUCTION)),
                ("barCharts".to_string(), with_instruction(BAR_CHARTS_INSTRUCTION)),
            ],
            current: 0,
        }
    }
}

impl PromptCatalog {
    pub fn current_key(&self) -> &str {
        &self.prompts[self.current].0
    }

    pub fn current_prompt(&self) -> &str {
        &self.prompts[self.current].1
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.prompts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, p)| p.as_str())
    }

    /// Select a variant; unknown keys leave the selection unchanged
    pub fn set_current(&mut self, key: &str) -> bool {
        match self.prompts.iter().position(|(k, _)| k == key) {
            Some(idx) => {
                self.current = idx;
                tracing::info!("Prompt switched to: {}", key);
                true
            }
            None => {
                tracing::warn!(
                    "Prompt key \"{}\" not found. Available keys: {}",
                    key,
                    self.available_keys().join(", ")
                );
                false
            }
        }
    }

    pub fn available_keys(&self) -> Vec<&str> {
        self.prompts.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Add or replace a variant
    pub fn insert(&mut self, key: &str, prompt: String) {
        match self.prompts.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = prompt,
            None => self.prompts.push((key.to_string(), prompt)),
        }
    }
}
