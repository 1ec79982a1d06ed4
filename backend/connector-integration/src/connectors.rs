pub mod authorizedotnet;

pub use self::authorizedotnet::Authorizedotnet;
