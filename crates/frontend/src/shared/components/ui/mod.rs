pub mod badge;
pub mod input;
pub mod textarea;

pub use badge::category_badge;
pub use input::Input;
pub use textarea::Textarea;
