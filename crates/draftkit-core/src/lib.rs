//! draftkit Core Library
//!
//! Platform-agnostic logic behind the draftkit rich-text editor UI: floating
//! element placement, class-name namespacing, theming and toolbar state.

pub mod blocks;
pub mod classnames;
pub mod colors;
pub mod diagnostics;
pub mod formatting;
pub mod point;
pub mod position;
pub mod theme;
pub mod viewport;

pub use blocks::{default_picker_options, filter_options, BlockType, PickerOption, RootType};
pub use classnames::{class_names, prefix_class_name, prefix_class_names, ClassPrefix};
pub use colors::{find_color, parse_hex_color, ColorError, ColorItem, DEFAULT_COLOR_ITEMS};
pub use diagnostics::WarnOnce;
pub use formatting::{selection_shows_toolbar, ActiveFormats, TextFormat};
pub use point::Point;
pub use position::{
    compute_floating_position, hide_floating_element, set_floating_element_position,
    set_floating_element_position_for_link_editor, AboveTarget, AnchorElement, BelowTarget,
    CustomPlacement, FloatingElement, FloatingStyle, Measurable, Placement, PositionConfig,
    HORIZONTAL_OFFSET, VERTICAL_GAP,
};
pub use theme::{ContainerSlot, EditorTheme, TextTheme, ThemeError};
pub use viewport::{ViewportWidth, DEFAULT_SMALL_VIEWPORT_WIDTH};

pub use kurbo::Rect;
