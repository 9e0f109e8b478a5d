//! Confirm dialog state.
//!
//! Data model for the yes/no prompt that gates clearing the packing list.

use crate::message::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub item_count: usize,
    pub options: Vec<(String, Message)>,
}

impl ConfirmDialogState {
    /// Create the clear-list confirmation dialog state
    pub fn clear_confirmation(item_count: usize) -> Self {
        Self {
            title: "Clear packing list?".to_string(),
            message: if item_count == 1 {
                "Are you sure you want to delete 1 item?".to_string()
            } else {
                format!("Are you sure you want to delete all {} items?", item_count)
            },
            item_count,
            options: vec![
                ("Clear".to_string(), Message::ConfirmClear),
                ("Cancel".to_string(), Message::CancelClear),
            ],
        }
    }

    /// Map a yes/no answer onto the dialog's first (affirmative) or last option
    pub fn answer(&self, yes: bool) -> Option<Message> {
        let option = if yes {
            self.options.first()
        } else {
            self.options.last()
        };
        option.map(|(_, msg)| msg.clone())
    }
}
