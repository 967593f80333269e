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
        LuBookOpen as FilePdf, LuExternalLink as ExternalLink, LuFile as File,
        LuImage as FileImage, LuMinus as Minimize, LuPictureInPicture as PipEnter,
        LuPictureInPicture as PipExit, LuTriangleAlert as Warning, LuX as Close,
        LuZoomIn as Zoom,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBoxArrowUpRight as ExternalLink, BsDashLg as Minimize, BsExclamationTriangle as Warning,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsPip as PipEnter, BsPipFill as PipExit, BsXLg as Close, BsZoomIn as Zoom,
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

themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(CLOSE, Close);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(MINIMIZE, Minimize);
themed_icon!(ZOOM, Zoom);
themed_icon!(PIP_ENTER, PipEnter);
themed_icon!(PIP_EXIT, PipExit);
themed_icon!(WARNING, Warning);
