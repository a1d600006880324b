//! Prompt (modal dialog) stack entries.

use std::fmt;
use std::rc::Rc;

use serde_json::Value;

use crate::store::Store;

/// Callback attached to a prompt.
///
/// Receives the store so it can run further mutations (close the stack,
/// pop itself, ...). Prompts are cloned cheaply because callbacks are shared.
pub type PromptAction = Rc<dyn Fn(&mut Store)>;

/// A modal dialog on the prompt stack.
///
/// Built either from a bare name (`Prompt::from("delete")`) or through the
/// builder methods when callbacks or props are needed.
#[derive(Clone, Default)]
pub struct Prompt {
    /// Dialog identifier used by the UI to pick the component.
    pub name: String,
    /// Invoked when the user confirms.
    pub confirm: Option<PromptAction>,
    /// Generic action hook (dialog specific).
    pub action: Option<PromptAction>,
    /// Display props forwarded to the dialog component.
    pub props: Option<Value>,
    /// Invoked when the user discards changes.
    pub discard: Option<PromptAction>,
    /// Invoked when the user cancels.
    pub cancel: Option<PromptAction>,
}

impl Prompt {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn on_confirm(mut self, f: impl Fn(&mut Store) + 'static) -> Self {
        self.confirm = Some(Rc::new(f));
        self
    }

    pub fn on_action(mut self, f: impl Fn(&mut Store) + 'static) -> Self {
        self.action = Some(Rc::new(f));
        self
    }

    pub fn on_discard(mut self, f: impl Fn(&mut Store) + 'static) -> Self {
        self.discard = Some(Rc::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl Fn(&mut Store) + 'static) -> Self {
        self.cancel = Some(Rc::new(f));
        self
    }

    pub fn with_props(mut self, props: Value) -> Self {
        self.props = Some(props);
        self
    }

    /// Check if this prompt has the given name.
    #[inline]
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }
}

impl From<&str> for Prompt {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Prompt {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl fmt::Debug for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prompt")
            .field("name", &self.name)
            .field("confirm", &self.confirm.is_some())
            .field("action", &self.action.is_some())
            .field("props", &self.props)
            .field("discard", &self.discard.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_name_has_no_callbacks() {
        let prompt = Prompt::from("delete");
        assert_eq!(prompt.name, "delete");
        assert!(prompt.confirm.is_none());
        assert!(prompt.action.is_none());
        assert!(prompt.props.is_none());
        assert!(prompt.discard.is_none());
        assert!(prompt.cancel.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let prompt = Prompt::new("rename")
            .on_confirm(|_| {})
            .on_cancel(|_| {})
            .with_props(json!({ "name": "a.txt" }));

        assert!(prompt.is("rename"));
        assert!(prompt.confirm.is_some());
        assert!(prompt.cancel.is_some());
        assert!(prompt.discard.is_none());
        assert_eq!(prompt.props, Some(json!({ "name": "a.txt" })));
    }

    #[test]
    fn test_debug_hides_callbacks() {
        let prompt = Prompt::new("share").on_action(|_| {});
        let debug = format!("{:?}", prompt);
        assert!(debug.contains("name: \"share\""));
        assert!(debug.contains("action: true"));
        assert!(debug.contains("confirm: false"));
    }
}
