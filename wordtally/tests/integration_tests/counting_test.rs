// tests/integration_tests/counting_test.rs
use super::common::setup_test_directory;
use anyhow::Result;
use wordtally::{Separators, count_file};

#[test]
fn test_counting_files() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let separators = Separators::default();

    let table = count_file(&temp_dir.path().join("mat.txt"), &separators)?;
    assert_eq!(table.len(), 5, "Should find 5 distinct words");
    assert_eq!(table.total(), 6, "Should count 6 words");
    assert_eq!(table.count("the"), Some(2));

    let table = count_file(&temp_dir.path().join("empty.txt"), &separators)?;
    assert!(table.is_empty(), "Empty file has no words");

    let table = count_file(&temp_dir.path().join("separators.txt"), &separators)?;
    assert!(table.is_empty(), "Separator-only file has no words");

    Ok(())
}

#[test]
fn test_counting_prose() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let table = count_file(&temp_dir.path().join("prose.txt"), &Separators::default())?;

    assert_eq!(table.count("it"), Some(4), "Case is folded");
    assert_eq!(table.count("was"), Some(4));
    assert_eq!(table.count("times"), Some(2), "Ellipsis and quotes are separators");
    assert_eq!(table.count("wisdom"), Some(1), "Em dash is a separator");
    assert_eq!(table.count("foolishness"), Some(1));
    assert_eq!(table.total(), 24);

    Ok(())
}

#[test]
fn test_counting_is_repeatable() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let path = temp_dir.path().join("prose.txt");
    let separators = Separators::default();

    assert_eq!(count_file(&path, &separators)?, count_file(&path, &separators)?);
    Ok(())
}

#[test]
fn test_missing_file_is_an_error() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let result = count_file(&temp_dir.path().join("nope.txt"), &Separators::default());
    assert!(result.is_err(), "Missing input should fail");
    Ok(())
}
