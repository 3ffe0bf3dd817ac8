use sdk::cosmwasm_std::Event;

use crate::batch::{Batch, Emitter};

/// The outcome of a state transition: messages to dispatch and events to publish
#[derive(Default)]
#[cfg_attr(any(test, feature = "testing"), derive(Debug, PartialEq, Eq))]
pub struct Response {
    pub(crate) messages: Batch,
    pub(crate) events: Vec<Event>,
}

impl Response {
    pub fn messages_only(messages: Batch) -> Self {
        Self {
            messages,
            events: vec![],
        }
    }

    pub fn messages_with_events(messages: Batch, events: Emitter) -> Self {
        Self {
            messages,
            events: vec![events.into()],
        }
    }

    pub fn merge_with(mut self, mut other: Self) -> Self {
        self.messages = self.messages.merge(other.messages);
        self.events.append(&mut other.events);

        self
    }

    pub fn messages(&self) -> &Batch {
        &self.messages
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }
}

impl From<Batch> for Response {
    fn from(messages: Batch) -> Self {
        Self::messages_only(messages)
    }
}

impl From<Emitter> for Response {
    fn from(events: Emitter) -> Self {
        Self::messages_with_events(Batch::default(), events)
    }
}
