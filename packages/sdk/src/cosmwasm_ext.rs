use cosmwasm_std::Empty;

/// The contracts of this workspace do not issue chain specific messages.
pub type CustomMsg = Empty;

pub type Response = cosmwasm_std::Response<CustomMsg>;
pub type CosmosMsg = cosmwasm_std::CosmosMsg<CustomMsg>;
pub type SubMsg = cosmwasm_std::SubMsg<CustomMsg>;
