pub mod builder;
pub mod constant;
pub mod context;
pub mod error;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{constant::TEST_SESSION_SECRET, TestBuilder, TestContext, TestError};
}
