use super::*;

#[test]
fn export_file_name_appends_architecture_suffix() {
    assert_eq!(export_file_name("react"), "react-architecture.png");
    assert_eq!(export_file_name("next.js"), "next.js-architecture.png");
}

#[test]
fn export_file_name_replaces_path_and_space_characters() {
    assert_eq!(export_file_name("facebook/react"), "facebook-react-architecture.png");
    assert_eq!(export_file_name("my repo"), "my-repo-architecture.png");
}

#[test]
fn export_file_name_handles_blank_names() {
    assert_eq!(export_file_name(""), "architecture.png");
    assert_eq!(export_file_name(" / "), "architecture.png");
}

#[test]
fn canvas_size_scales_and_rounds_up() {
    assert_eq!(canvas_size(400.0, 300.5), (800, 601));
}

#[test]
fn canvas_size_never_collapses_to_zero() {
    assert_eq!(canvas_size(0.0, -5.0), (2, 2));
}
