use serde::Serialize;

use sdk::{cosmwasm_ext::Response as CwResponse, cosmwasm_std::to_json_binary};

use crate::{error::Error, message::Response as MessageResponse};

pub fn empty_response() -> CwResponse {
    CwResponse::default()
}

/// Dispatch the scheduled transfers and publish the events
pub fn response_only_messages<M>(messages: M) -> CwResponse
where
    M: Into<MessageResponse>,
{
    let MessageResponse { messages, events } = messages.into();

    CwResponse::default()
        .add_submessages(messages)
        .add_events(events)
}

/// Same as [`response_only_messages`] with `data` attached serialized as JSON
pub fn response_with_messages<T, M, E>(data: T, messages: M) -> Result<CwResponse, E>
where
    T: Serialize,
    M: Into<MessageResponse>,
    Error: Into<E>,
{
    to_json_binary(&data)
        .map(|data| response_only_messages(messages).set_data(data))
        .map_err(|err| Error::Serialization(err).into())
}
