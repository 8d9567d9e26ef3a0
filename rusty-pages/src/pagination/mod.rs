//! Stable facade for pagination building blocks and the session runtime.

mod chunk;
mod components;
pub mod interaction;
mod navigation;
pub mod registry;
pub mod render;
pub mod respond;
pub mod session;
pub mod token;

pub use chunk::{chunk, total_pages};
pub use components::{
    ButtonControl, ComponentLayout, ComponentType, ControlStyle, EmojiSet, MenuOption,
    SELECT_MENU_MAX_OPTIONS, build_components,
};
pub use interaction::{ComponentAction, ComponentEvent, ReplyHandle, component_event};
pub use navigation::{NavAction, Navigator, Transition};
pub use registry::SessionRegistry;
pub use render::{ContentType, PageContent, render};
pub use respond::{Delivery, SendTarget, TwilightDelivery};
pub use session::{Session, SessionEnd, SessionOptions, SessionOutcome};
