mod sign_out;
mod spinner;

pub use sign_out::SignOutButton;
pub use spinner::LoadingSpinner as Spinner;
