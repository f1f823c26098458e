//! REST message-key catalog.
//!
//! Keys follow the `<PREFIX>_<FRAGMENT><SUFFIX>` convention; item-scoped
//! CRUD keys carry the `ITEM_` infix (`USER_ITEM_CREATE`,
//! `USER_ITEM_NOT_CREATE`, ...). The catalog is static data; message
//! consumers treat the produced strings as opaque.

/// Catalog of message-key fragments. Most actions come in triples:
/// the done form, the `Not*` form for a mutation that produced nothing,
/// and the `Error*` form for a failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Total,
    NotFound,
    TokenExpiredError,

    Authorised,
    Unauthorised,
    ErrorAuthorised,

    Exist,
    NotExist,
    ErrorExist,

    Identifier,
    NotIdentifier,
    ErrorIdentifier,

    Create,
    NotCreate,
    ErrorCreate,

    Update,
    NotUpdate,
    ErrorUpdate,

    UpdateOrCreate,
    NotUpdateOrCreate,
    ErrorUpdateOrCreate,

    UpdateMany,
    NotUpdateMany,
    ErrorUpdateMany,

    Get,
    NotGet,
    ErrorGet,

    GetMany,
    NotGetMany,
    ErrorGetMany,

    GetManyAndCount,
    NotGetManyAndCount,
    ErrorGetManyAndCount,

    GetCount,
    NotGetCount,
    ErrorGetCount,

    Delete,
    NotDelete,
    ErrorDelete,

    DeleteMany,
    NotDeleteMany,
    ErrorDeleteMany,

    Initialise,
    NotInitialise,
    ErrorInitialise,

    Increment,
    NotIncrement,
    ErrorIncrement,

    Decrement,
    NotDecrement,
    ErrorDecrement,

    Aggregation,
    NotAggregation,
    ErrorAggregation,

    UserRegistration,
    NotUserRegistration,
    ErrorUserRegistration,

    UserLogin,
    NotUserLogin,
    ErrorUserLogin,

    UserLogout,
    NotUserLogout,
    ErrorUserLogout,
}

impl MessageKey {
    pub fn fragment(self) -> &'static str {
        match self {
            MessageKey::Total => "TOTAL",
            MessageKey::NotFound => "NOT_FOUND",
            MessageKey::TokenExpiredError => "TOKEN_EXPIRED_ERROR",

            MessageKey::Authorised => "AUTHORISED",
            MessageKey::Unauthorised => "UNAUTHORISED",
            MessageKey::ErrorAuthorised => "ERROR_AUTHORISED",

            MessageKey::Exist => "EXIST",
            MessageKey::NotExist => "NOT_EXIST",
            MessageKey::ErrorExist => "ERROR_EXIST",

            MessageKey::Identifier => "IDENTIFIER",
            MessageKey::NotIdentifier => "NOT_IDENTIFIER",
            MessageKey::ErrorIdentifier => "ERROR_IDENTIFIER",

            MessageKey::Create => "ITEM_CREATE",
            MessageKey::NotCreate => "ITEM_NOT_CREATE",
            MessageKey::ErrorCreate => "ITEM_ERROR_CREATE",

            MessageKey::Update => "ITEM_UPDATE",
            MessageKey::NotUpdate => "ITEM_NOT_UPDATE",
            MessageKey::ErrorUpdate => "ITEM_ERROR_UPDATE",

            MessageKey::UpdateOrCreate => "ITEM_UPDATE_OR_CREATE",
            MessageKey::NotUpdateOrCreate => "ITEM_NOT_UPDATE_OR_CREATE",
            MessageKey::ErrorUpdateOrCreate => "ITEM_ERROR_UPDATE_OR_CREATE",

            MessageKey::UpdateMany => "UPDATE_MANY",
            MessageKey::NotUpdateMany => "NOT_UPDATE_MANY",
            MessageKey::ErrorUpdateMany => "ERROR_UPDATE_MANY",

            MessageKey::Get => "ITEM_GET",
            MessageKey::NotGet => "ITEM_NOT_GET",
            MessageKey::ErrorGet => "ITEM_ERROR_GET",

            MessageKey::GetMany => "GET_MANY",
            MessageKey::NotGetMany => "NOT_GET_MANY",
            MessageKey::ErrorGetMany => "ERROR_GET_MANY",

            MessageKey::GetManyAndCount => "GET_MANY_AND_COUNT",
            MessageKey::NotGetManyAndCount => "NOT_GET_MANY_AND_COUNT",
            MessageKey::ErrorGetManyAndCount => "ERROR_GET_MANY_AND_COUNT",

            MessageKey::GetCount => "GET_COUNT",
            MessageKey::NotGetCount => "NOT_GET_COUNT",
            MessageKey::ErrorGetCount => "ERROR_GET_COUNT",

            MessageKey::Delete => "ITEM_DELETE",
            MessageKey::NotDelete => "ITEM_NOT_DELETE",
            MessageKey::ErrorDelete => "ITEM_ERROR_DELETE",

            MessageKey::DeleteMany => "DELETE_MANY",
            MessageKey::NotDeleteMany => "NOT_DELETE_MANY",
            MessageKey::ErrorDeleteMany => "ERROR_DELETE_MANY",

            MessageKey::Initialise => "INITIALISE",
            MessageKey::NotInitialise => "NOT_INITIALISE",
            MessageKey::ErrorInitialise => "ERROR_INITIALISE",

            MessageKey::Increment => "INCREMENT",
            MessageKey::NotIncrement => "NOT_INCREMENT",
            MessageKey::ErrorIncrement => "ERROR_INCREMENT",

            MessageKey::Decrement => "DECREMENT",
            MessageKey::NotDecrement => "NOT_DECREMENT",
            MessageKey::ErrorDecrement => "ERROR_DECREMENT",

            MessageKey::Aggregation => "AGGREGATION",
            MessageKey::NotAggregation => "NOT_AGGREGATION",
            MessageKey::ErrorAggregation => "ERROR_AGGREGATION",

            MessageKey::UserRegistration => "USER_REGISTRATION",
            MessageKey::NotUserRegistration => "NOT_USER_REGISTRATION",
            MessageKey::ErrorUserRegistration => "ERROR_USER_REGISTRATION",

            MessageKey::UserLogin => "USER_LOGIN",
            MessageKey::NotUserLogin => "NOT_USER_LOGIN",
            MessageKey::ErrorUserLogin => "ERROR_USER_LOGIN",

            MessageKey::UserLogout => "USER_LOGOUT",
            MessageKey::NotUserLogout => "NOT_USER_LOGOUT",
            MessageKey::ErrorUserLogout => "ERROR_USER_LOGOUT",
        }
    }
}

pub fn rest_message(prefix: &str, key: MessageKey) -> String {
    format!("{}_{}", prefix, key.fragment())
}

pub fn rest_message_with_suffix(prefix: &str, key: MessageKey, suffix: &str) -> String {
    format!("{}_{}{}", prefix, key.fragment(), suffix)
}

/// Splits a message key on `separator`. Fewer than two segments yields
/// three empty strings so destructuring callers never index out of range.
pub fn parse_message_key(message: &str, separator: &str) -> Vec<String> {
    let parts: Vec<String> = message.split(separator).map(str::to_string).collect();
    if parts.len() < 2 {
        return vec![String::new(), String::new(), String::new()];
    }
    parts
}
