use stream_chart::ChartError;
use stream_chart::core::{ColorToken, FALLBACK_FILL_COLOR, derive_fill_color};
use stream_chart::render::Color;

#[test]
fn well_formed_hex_keeps_channels_with_fixed_alpha() {
    assert_eq!(derive_fill_color("#ff0000"), "rgba(255,0,0,0.1)");
    assert_eq!(derive_fill_color("#00ff00"), "rgba(0,255,0,0.1)");
    assert_eq!(derive_fill_color("#0a1B2c"), "rgba(10,27,44,0.1)");
}

#[test]
fn tokens_without_prefix_fall_back() {
    for token in ["not-a-color", "ff0000", "", "red", "rgb(1,2,3)", " #ff0000"] {
        assert_eq!(derive_fill_color(token), FALLBACK_FILL_COLOR, "{token:?}");
    }
    assert_eq!(FALLBACK_FILL_COLOR, "rgba(0,0,0,0.1)");
}

#[test]
fn malformed_prefixed_tokens_fall_back_instead_of_producing_nan_channels() {
    for token in ["#zzzzzz", "#fff", "#ff00", "#ff00000", "#ff0000ff", "#", "#gg0000", "#ff 000"] {
        assert_eq!(derive_fill_color(token), FALLBACK_FILL_COLOR, "{token:?}");
    }
}

#[test]
fn strict_hex_parser_reports_invalid_color_format() {
    let err = ColorToken::from_hex("#zzzzzz").expect_err("non-hex must fail");
    assert!(matches!(err, ChartError::InvalidColorFormat(_)));

    let err = ColorToken::from_hex("123456").expect_err("missing prefix must fail");
    assert!(matches!(err, ChartError::InvalidColorFormat(_)));
}

#[test]
fn render_colors_resolve_from_line_and_fill_tokens() {
    let line = Color::from_token_or("#ff0000", Color::BLACK);
    approx::assert_relative_eq!(line.red, 1.0);
    approx::assert_relative_eq!(line.alpha, 1.0);

    let fill = Color::from_token_or(&derive_fill_color("#3366cc"), Color::BLACK);
    approx::assert_relative_eq!(fill.green, 102.0 / 255.0);
    approx::assert_relative_eq!(fill.alpha, 0.1);

    assert_eq!(Color::from_token_or("tomato", Color::BLACK), Color::BLACK);
}
