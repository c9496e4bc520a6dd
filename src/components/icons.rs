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
        LuBookOpen as FilePdf, LuBot as Assistant, LuBraces as FileJson,
        LuChevronRight as ChevronRight, LuFile as File, LuFileCode as FileScript,
        LuFileCode as FilePython, LuFileText as FileText, LuFileText as FileMarkdown,
        LuFileText as Document, LuFolder as Folder, LuFolderOpen as Explorer,
        LuGlobe as FileHtml, LuPalette as FileStyle, LuPlus as Plus, LuSend as Send,
        LuUpload as Upload,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChevronRight as ChevronRight, BsFileEarmark as File, BsFileEarmarkText as Document,
        BsFiletypeCss as FileStyle, BsFiletypeHtml as FileHtml, BsFiletypeJs as FileScript,
        BsFiletypeJson as FileJson, BsFiletypeMd as FileMarkdown, BsFiletypePdf as FilePdf,
        BsFiletypePy as FilePython, BsFiletypeTxt as FileText, BsFolder2 as Explorer,
        BsFolderFill as Folder, BsPlusLg as Plus, BsRobot as Assistant, BsSend as Send,
        BsUpload as Upload,
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

themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_MARKDOWN, FileMarkdown);
themed_icon!(FILE_SCRIPT, FileScript);
themed_icon!(FILE_STYLE, FileStyle);
themed_icon!(FILE_HTML, FileHtml);
themed_icon!(FILE_JSON, FileJson);
themed_icon!(FILE_PYTHON, FilePython);
themed_icon!(EXPLORER, Explorer);
themed_icon!(DOCUMENT, Document);
themed_icon!(ASSISTANT, Assistant);
themed_icon!(PLUS, Plus);
themed_icon!(UPLOAD, Upload);
themed_icon!(SEND, Send);
