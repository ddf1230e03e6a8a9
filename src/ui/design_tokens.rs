// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: base colors, brand violet scale, stage colors
//! - **Opacity**: standardized opacity levels
//! - **Spacing**: spacing scale (8px grid)
//! - **Sizing**: component sizes
//! - **Typography**: font size scale
//! - **Radius**: border radii
//! - **Shadow**: shadow definitions

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (violet scale)
    pub const PRIMARY_100: Color = Color::from_rgb(0.93, 0.9, 1.0); // Very light violet
    pub const PRIMARY_200: Color = Color::from_rgb(0.85, 0.8, 0.98); // Light violet
    pub const PRIMARY_400: Color = Color::from_rgb(0.62, 0.5, 0.95); // Medium light violet
    pub const PRIMARY_500: Color = Color::from_rgb(0.5, 0.36, 0.9); // Primary violet
    pub const PRIMARY_600: Color = Color::from_rgb(0.4, 0.28, 0.78); // Medium dark violet
    pub const PRIMARY_700: Color = Color::from_rgb(0.32, 0.22, 0.64); // Dark violet

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);

    // Stage colors for the progression strip and result badge,
    // benign green through severe red.
    pub const STAGE_NON_DEMENTED: Color = SUCCESS_500;
    pub const STAGE_VERY_MILD: Color = Color::from_rgb(0.85, 0.78, 0.25);
    pub const STAGE_MILD: Color = WARNING_500;
    pub const STAGE_MODERATE: Color = ERROR_500;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    // Upload section
    pub const SPINNER_DIAMETER: f32 = 40.0;
    pub const DROP_AREA_HEIGHT: f32 = 260.0;
    pub const PREVIEW_MAX_HEIGHT: f32 = 220.0;
    pub const RESULTS_PANEL_WIDTH: f32 = 360.0;
    pub const CONFIDENCE_BAR_WIDTH: f32 = 280.0;
    pub const CONFIDENCE_BAR_HEIGHT: f32 = 10.0;

    // Progression strip
    pub const STAGE_CIRCLE: f32 = 28.0;
    pub const STAGE_CONNECTOR_WIDTH: f32 = 40.0;

    // Reading width for long-form section copy
    pub const CONTENT_MAX_WIDTH: f32 = 760.0;

    // Overall width cap for a page section
    pub const SECTION_MAX_WIDTH: f32 = 1080.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const TITLE_XL: f32 = 42.0;

    /// Large title - section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - app name, card headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - sub-headings.
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - lead paragraphs.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text.
    pub const BODY: f32 = 14.0;

    /// Caption - badges, hints, small info.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    // Typography validation
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    // Color validation
    assert!(palette::PRIMARY_500.r >= 0.0 && palette::PRIMARY_500.r <= 1.0);
};
