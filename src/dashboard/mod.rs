//! View-models for the study dashboard
//!
//! UI state lives in explicit values here (sidebar, carousel, dialogs)
//! and is passed to whatever renders it.

pub mod carousel;
pub mod chat;
pub mod navigation;
pub mod view;

pub use carousel::{slides, Carousel, Direction, Slide, AUTOPLAY_INTERVAL};
pub use chat::{AddCardDraft, ChatDialog, ChatError, ChatMessage, DialogState, Role};
pub use navigation::{sidebar_nav, top_nav, NavLink, SidebarState};
pub use view::{
    quick_actions, DashboardView, DeckCard, QuickAction, StatCard, ViewOptions, WeeklyGoal,
};
