//! Attribute writer composition tests
//!
//! Renderers only share the writer; these tests check that independently
//! written sections compose with consistent indentation and ordering.

use kncron::{AttributeWriter, PrefixWriter};

fn write_pair(dw: &mut dyn AttributeWriter, label: &str, value: &str) {
    dw.write_attribute(label, value);
}

fn write_nested(dw: &mut dyn AttributeWriter) {
    let mut outer = dw.section("Outer");
    outer.write_attribute("A", "1");
    {
        let mut inner = outer.section("Inner");
        inner.write_attribute("B", "2");
    }
    outer.write_attribute("C", "3");
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_rows_keep_call_order() {
    let mut buf = Vec::new();
    let mut dw = PrefixWriter::new(&mut buf);
    for label in ["Zeta", "Alpha", "Mu"] {
        write_pair(&mut dw, label, "x");
    }
    dw.flush().unwrap();

    assert_eq!(output(buf), "Zeta:  x\nAlpha: x\nMu:    x\n");
}

#[test]
fn test_sibling_sections_share_depth() {
    let mut buf = Vec::new();
    let mut dw = PrefixWriter::new(&mut buf);
    write_nested(&mut dw);
    write_nested(&mut dw);
    dw.flush().unwrap();

    // C shares a column block with the closed Inner section's last row.
    let expected = "Outer:\n  A: 1\n  Inner:\n    B: 2\n  C:   3\n";
    assert_eq!(output(buf), format!("{expected}{expected}"));
}

#[test]
fn test_rows_after_child_section_return_to_parent_depth() {
    let mut buf = Vec::new();
    let mut dw = PrefixWriter::new(&mut buf);
    write_nested(&mut dw);
    dw.write_attribute("Top", "level");
    dw.flush().unwrap();

    assert!(output(buf).ends_with("    B: 2\n  C:   3\nTop:   level\n"));
}

#[test]
fn test_each_flush_aligns_independently() {
    let mut buf = Vec::new();
    let mut dw = PrefixWriter::new(&mut buf);
    dw.write_attribute("A", "x");
    dw.flush().unwrap();
    dw.write_attribute("Longer", "y");
    dw.flush().unwrap();

    assert_eq!(output(buf), "A: x\nLonger: y\n");
}

#[test]
fn test_unflushed_rows_are_not_written() {
    let mut buf = Vec::new();
    {
        let mut dw = PrefixWriter::new(&mut buf);
        dw.write_attribute("Flushed", "yes");
        dw.flush().unwrap();
        dw.write_attribute("Pending", "no");
    }
    assert_eq!(output(buf), "Flushed: yes\n");
}

#[test]
fn test_blank_line_inside_section() {
    let mut buf = Vec::new();
    let mut dw = PrefixWriter::new(&mut buf);
    {
        let mut section = dw.section("Sink");
        section.write_attribute("Name", "svc1");
        section.write_line();
        section.write_attribute("Namespace", "default");
    }
    dw.flush().unwrap();

    assert_eq!(
        output(buf),
        "Sink:\n  Name: svc1\n\n  Namespace: default\n"
    );
}

#[test]
fn test_writers_do_not_share_state() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut a = PrefixWriter::new(&mut first);
    let mut b = PrefixWriter::new(&mut second);

    a.section("Only").write_attribute("In", "a");
    b.write_attribute("Flat", "b");
    a.flush().unwrap();
    b.flush().unwrap();

    assert_eq!(output(first), "Only:\n  In: a\n");
    assert_eq!(output(second), "Flat: b\n");
}
