pub mod contact_service;
pub mod errors;
pub mod lookup_service;
pub mod pet_service;

mod test_support;
