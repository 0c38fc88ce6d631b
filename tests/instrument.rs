use survey_reduction::instrument::{
    parse_reading, GsiLine, InstrumentFormat, M5Line, ReadingParser, TaggedLine,
};
use survey_reduction::ParseError;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn fixed_width_reference_vectors() {
    init_logging();
    let reading = parse_reading(InstrumentFormat::Fixed, "0003860 0890446 2421636").unwrap();
    assert!((reading.slope_distance - 3.86).abs() < 1e-9);
    assert!((reading.vertical_angle - 359.08).abs() < 0.01);
    assert!((reading.horizontal_angle - 242.28).abs() < 0.01);

    // wrong total length
    assert_eq!(
        parse_reading(InstrumentFormat::Fixed, "0003860  2421636"),
        Err(ParseError::InvalidLine("fixed-width"))
    );
}

#[test]
fn gsi_line_reduces_through_word_addresses() {
    init_logging();
    let line = "11....+0000A001 21.322+08904460 22.322+09000000 \
                31..00+00123456 51....+0000+000 87..10+00001700 \
                88..10+00001500 ";
    let gsi = GsiLine::new(line);
    assert!(gsi.is_valid());
    let reading = parse_reading(InstrumentFormat::Gsi, line).unwrap();
    assert!((reading.slope_distance - 123.456).abs() < 1e-9);
    assert!((reading.horizontal_angle - 89.0794).abs() < 0.01);
    assert!(reading.vertical_angle.abs() < 1e-9);
}

#[test]
fn tagged_line_takes_last_field_occurrence() {
    init_logging();
    let raw = TaggedLine::new("HA:0000000 SD:9999999 HA:24216365 VA:08904460 SD:1234567 HT:0001500");
    assert!(raw.is_valid());
    assert!((raw.parse_slope_distance().unwrap() - 123.4567).abs() < 1e-9);
    assert!((raw.parse_horizontal_angle().unwrap() - 242.2768).abs() < 0.001);
}

#[test]
fn m5_record_is_already_decimal() {
    init_logging();
    let line = "For M5|Adr 00042|TI PT17 |SD 123.456 m |Hz 242.2768 DMS |V1 89.0794 DMS";
    let rec = M5Line::new(line);
    assert!(rec.is_valid());
    let reading = parse_reading(InstrumentFormat::M5, line).unwrap();
    assert!((reading.slope_distance - 123.456).abs() < 1e-9);
    assert!((reading.horizontal_angle - 242.2768).abs() < 1e-9);
    assert!((reading.vertical_angle - 89.0794).abs() < 1e-9);
}

#[test]
fn dialects_reject_each_other() {
    init_logging();
    let fixed = "0003860 0890446 2421636";
    assert_eq!(
        parse_reading(InstrumentFormat::Gsi, fixed),
        Err(ParseError::InvalidLine("GSI"))
    );
    assert_eq!(
        parse_reading(InstrumentFormat::Tagged, fixed),
        Err(ParseError::InvalidLine("tagged raw"))
    );
    assert_eq!(
        parse_reading(InstrumentFormat::M5, fixed),
        Err(ParseError::InvalidLine("M5"))
    );
}
