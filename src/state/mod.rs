//! Client-side state: session, async resources, and form wizards.

pub mod resource;
pub mod school_signup;
pub mod session;
pub mod wizard;
