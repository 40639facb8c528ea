use hampug_meetings::{extract_minutes, Error};

#[test]
fn children_are_numbered_from_zero_in_document_order() {
    let html = br#"
        <html><body>
          <article><h1>A</h1><h2>B</h2><p>C</p></article>
        </body></html>
    "#;

    match extract_minutes(html) {
        Ok(record) => assert_eq!(record.render(), "0. A\n1. B\n2. C\n"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn markup_inside_a_child_collapses_to_plain_text() {
    let html = br##"
        <html><body>
          <article><p>The meeting was held at <b>MS4.G.02</b>, see <a href="#">the map</a>.</p></article>
        </body></html>
    "##;

    match extract_minutes(html) {
        Ok(record) => assert_eq!(
            record.render(),
            "0. The meeting was held at MS4.G.02, see the map.\n"
        ),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn empty_child_keeps_its_numbered_line() {
    let html = b"<html><body><article><h1>Heading</h1><p></p><p>Body</p></article></body></html>";

    match extract_minutes(html) {
        Ok(record) => assert_eq!(record.render(), "0. Heading\n1. \n2. Body\n"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn container_with_zero_children_is_valid_and_empty() {
    let html = b"<html><body><article></article></body></html>";

    match extract_minutes(html) {
        Ok(record) => {
            assert!(record.lines().is_empty());
            assert_eq!(record.render(), "");
        }
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn first_container_is_authoritative_when_several_exist() {
    let html = br#"
        <html><body>
          <article><p>first</p></article>
          <article><p>second</p></article>
        </body></html>
    "#;

    match extract_minutes(html) {
        Ok(record) => assert_eq!(record.render(), "0. first\n"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn missing_container_is_a_structure_error() {
    let html = b"<html><body><div><p>not an article</p></div></body></html>";

    assert!(matches!(
        extract_minutes(html),
        Err(Error::StructureNotFound(_))
    ));
}

#[test]
fn description_text_between_elements_does_not_get_its_own_line() {
    // Text nodes directly inside the container only contribute to no line;
    // numbering follows element children alone.
    let html = b"<html><body><article>stray text<p>A</p></article></body></html>";

    match extract_minutes(html) {
        Ok(record) => assert_eq!(record.render(), "0. A\n"),
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}
