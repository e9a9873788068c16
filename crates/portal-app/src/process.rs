//! Message processing
//!
//! Runs a message through the TEA update function, following up on any
//! chained messages and executing the actions it requests.

use crate::actions::handle_action;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message(state: &mut AppState, message: Message) {
    process_message_with(state, message, handle_action);
}

/// Process a message, executing actions with `run_action`.
///
/// A message returned by `run_action` is processed in the same loop.
pub fn process_message_with<F>(state: &mut AppState, message: Message, mut run_action: F)
where
    F: FnMut(UpdateAction) -> Option<Message>,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        let follow_up = result.action.and_then(&mut run_action);
        msg = result.message.or(follow_up);
    }
}
