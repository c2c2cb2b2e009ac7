use serde::{Deserialize, Serialize};

/// Instruction block sent as the system message of every request.
pub const SYSTEM_PROMPT: &str = "\
You are an experienced WordPress developer tasked with creating a new plugin. Please provide all files for a WordPress plugin based on the following specifications:

Your response should include:

1. A brief description of the plugin.
2. The main PHP file including.
   - Plugin header comment block with metadata
   - Security measures (e.g., preventing direct access)
   - Main plugin class structure
3. Key functions the plugin should include, such as:
   - Activation and deactivation hooks
   - Admin menu and settings page (if applicable)
   - Any custom post types or taxonomies (if applicable)
   - Enqueuing necessary scripts and styles
4. Action and filter hooks the plugin should use or create.
5. Any database interactions or custom tables required (provide table structure if needed).
6. Considerations for internationalization and localization.
7. Basic security measures and data sanitization methods.
8. Ideas for potential future enhancements or premium features.

Please make files using appropriate WordPress coding standards and best practices. Include comments in the code snippets to explain key parts of the functionality.

Assuming the current directory is the plugin directory `wp-content/plugins`, please specify the paths of each file using relative paths.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One chat message, serialized in the chat completions wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Fixed text injected into the prompt builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptConfig {
    pub system: &'static str,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            system: SYSTEM_PROMPT,
        }
    }
}

/// Build the message sequence for a plugin generation request.
///
/// Always three messages: the system instruction, the plugin name, and the
/// user's prompt. Inputs are used verbatim, empty strings included.
pub fn build_messages(config: &PromptConfig, name: &str, prompt: &str) -> Vec<Message> {
    vec![
        Message::system(config.system),
        Message::user(format!("Create a plugin named {name}")),
        Message::user(prompt),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_messages_in_role_order() {
        let messages = build_messages(&PromptConfig::default(), "Acme", "Add a shortcode");

        let roles: Vec<Role> = messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::System, Role::User, Role::User]);
    }

    #[test]
    fn test_name_message_is_verbatim() {
        let name = "Acme \"Quotes\" & <Tags> {braces}";
        let messages = build_messages(&PromptConfig::default(), name, "x");

        assert_eq!(
            messages[1].content,
            "Create a plugin named Acme \"Quotes\" & <Tags> {braces}"
        );
    }

    #[test]
    fn test_prompt_message_is_unmodified() {
        let prompt = "  Multi-line\nprompt with trailing space ";
        let messages = build_messages(&PromptConfig::default(), "Acme", prompt);

        assert_eq!(messages[2].content, prompt);
    }

    #[test]
    fn test_empty_inputs() {
        let messages = build_messages(&PromptConfig::default(), "", "");

        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "Create a plugin named ");
        assert_eq!(messages[2].content, "");
    }

    #[test]
    fn test_system_prompt_is_injected() {
        let config = PromptConfig {
            system: "You write tests.",
        };
        let messages = build_messages(&config, "Acme", "x");

        assert_eq!(messages[0], Message::system("You write tests."));
    }

    #[test]
    fn test_default_system_prompt_mentions_relative_paths() {
        let messages = build_messages(&PromptConfig::default(), "Acme", "x");

        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert!(SYSTEM_PROMPT.ends_with("please specify the paths of each file using relative paths."));
    }

    #[test]
    fn test_message_wire_format() {
        let value = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(value, serde_json::json!({"role": "user", "content": "hi"}));
    }
}
