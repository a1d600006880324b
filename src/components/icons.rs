//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowDownWideNarrow as SortDesc, LuArrowUpNarrowWide as SortAsc, LuFile as File,
        LuFolder as Folder, LuListChecks as MultiSelect, LuPanelLeft as Sidebar, LuPin as Pin,
        LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsCheck2Square as MultiSelect, BsFileEarmark as File, BsFolderFill as Folder,
        BsLayoutSidebar as Sidebar, BsPinAngleFill as Pin, BsSortDown as SortDesc,
        BsSortUp as SortAsc, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(CLOSE, Close);
themed_icon!(SORT_ASC, SortAsc);
themed_icon!(SORT_DESC, SortDesc);
themed_icon!(MULTI_SELECT, MultiSelect);
themed_icon!(SIDEBAR, Sidebar);
themed_icon!(PIN, Pin);
