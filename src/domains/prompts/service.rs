//! Prompt service implementation.
//!
//! The PromptService manages prompt templates and their instantiation.
//! Rendering merges the caller's arguments with facts looked up in the
//! catalog, so prompts always describe the tools as currently listed.
//!
//! Prompts are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new prompt does NOT require modifying this file.

use rmcp::model::{GetPromptResult, Prompt, PromptMessage, PromptMessageRole};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::{RegisteredPrompt, get_all_prompts};
use crate::domains::catalog::CatalogStore;

/// Service for managing and instantiating prompts.
pub struct PromptService {
    /// The catalog prompts draw their facts from.
    catalog: Arc<CatalogStore>,

    /// Registry of available prompts.
    /// Key: prompt name, Value: registered prompt
    prompts: BTreeMap<String, RegisteredPrompt>,
}

impl PromptService {
    /// Create a new PromptService over the given catalog.
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        info!("Initializing PromptService");

        let mut service = Self {
            catalog,
            prompts: BTreeMap::new(),
        };

        // Register all prompts from registry
        service.register_from_registry();

        service
    }

    /// Register all prompts from the registry.
    fn register_from_registry(&mut self) {
        info!("Registering prompts from registry");
        for prompt in get_all_prompts() {
            self.register_prompt(prompt);
        }
    }

    /// Register a prompt.
    pub fn register_prompt(&mut self, prompt: RegisteredPrompt) {
        info!("Registering prompt: {}", prompt.template.name);
        self.prompts.insert(prompt.template.name.clone(), prompt);
    }

    /// List all available prompts.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.prompts
            .values()
            .map(|prompt| Prompt {
                name: prompt.template.name.clone(),
                title: None,
                description: prompt.template.description.clone(),
                arguments: Some(prompt.template.arguments.clone()),
                icons: None,
                meta: None,
            })
            .collect()
    }

    /// Get a prompt rendered with the caller's arguments and catalog facts.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<HashMap<String, String>>,
    ) -> Result<GetPromptResult, PromptError> {
        let prompt = self
            .prompts
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;
        let template = &prompt.template;

        let mut variables = arguments.unwrap_or_default();

        // Validate required arguments
        for arg in &template.arguments {
            let present = variables
                .get(&arg.name)
                .is_some_and(|v| !v.trim().is_empty());
            if arg.required.unwrap_or(false) && !present {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        let context = (prompt.context)(&variables, &self.catalog)?;
        debug!("Prompt {} context: {:?}", name, context.keys());
        variables.extend(context);

        let content = template.render(&variables)?;

        Ok(GetPromptResult {
            description: template.description.clone(),
            messages: vec![PromptMessage::new_text(PromptMessageRole::User, content)],
        })
    }
}
