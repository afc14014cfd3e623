// PRDatabase — Application Shell
//
// The explicit application context: startup sequencing, the auth and
// record components, and the view state a front end renders from.

mod app;
mod error;
mod validate;
mod view;

pub use app::App;
pub use error::ShellError;
pub use validate::{validate_required, ValidationError};
pub use view::{AuthMode, Phase, RevealState, View, MASKED_PASSWORD};
