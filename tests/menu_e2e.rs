use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn lexicat_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lexicat").unwrap();
    cmd.env("LEXICAT_CONFIG_DIR", config_dir.path().as_os_str());
    cmd
}

#[test]
fn test_add_and_list_categories() {
    let temp = TempDir::new().unwrap();

    // 2: add "fruits" and "animals", blank stops; 1: list; 0 + Y: exit.
    lexicat_cmd(&temp)
        .write_stdin("2\nfruits\nanimals\n\n1\n0\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 new category name(s) added"))
        .stdout(predicate::str::contains("fruits"))
        .stdout(predicate::str::contains("animals"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_duplicate_category_is_reported() {
    let temp = TempDir::new().unwrap();

    lexicat_cmd(&temp)
        .write_stdin("2\nfruits\nfruits\n\n0\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"))
        .stdout(predicate::str::contains("1 new category name(s) added"));
}

#[test]
fn test_insert_words_and_save() {
    let temp = TempDir::new().unwrap();
    let vocab = temp.path().join("vocab.txt");

    // 2: add "fruits"; 5: modify it; submenu 2: insert three words; 0: back;
    // 9: save; 0 + Y: exit.
    let script = format!(
        "2\nfruits\n\n5\nfruits\n2\npear\napple\nmango\n\n0\n9\n{}\n0\nY\n",
        vocab.display()
    );
    lexicat_cmd(&temp)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("3 word(s) added to 'fruits'"))
        .stdout(predicate::str::contains("Saved 1 category to"));

    let content = fs::read_to_string(&vocab).unwrap();
    assert!(content.starts_with("#fruits\n"));
    let apple = content.find("apple").unwrap();
    let mango = content.find("mango").unwrap();
    let pear = content.find("pear").unwrap();
    assert!(apple < mango && mango < pear, "words not sorted: {content:?}");
}

#[test]
fn test_save_then_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let vocab = temp.path().join("vocab.txt");

    let script = format!(
        "2\nverbs\n\n5\nverbs\n2\nrun\njump\n\n0\n9\n{}\n0\nY\n",
        vocab.display()
    );
    lexicat_cmd(&temp).write_stdin(script).assert().success();

    // Fresh session: 8 loads the file back, 6 finds a stored word.
    let script = format!("8\n{}\n6\njump\n0\nY\n", vocab.display());
    lexicat_cmd(&temp)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 1 category from"))
        .stdout(predicate::str::contains("Category 'verbs' has the word 'jump'"));
}

#[test]
fn test_startup_file_argument_loads_before_menu() {
    let temp = TempDir::new().unwrap();
    let vocab = temp.path().join("colors.txt");
    fs::write(&vocab, "#colors\nred\nblue\n").unwrap();

    lexicat_cmd(&temp)
        .arg(&vocab)
        .write_stdin("1\n0\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("colors"))
        .stdout(predicate::str::contains("blue"))
        .stdout(predicate::str::contains("red"));
}

#[test]
fn test_words_by_starting_letter_across_categories() {
    let temp = TempDir::new().unwrap();
    let vocab = temp.path().join("vocab.txt");
    fs::write(&vocab, "#fruits\npear\napple\n\n#animals\npig\ncrab\n").unwrap();

    lexicat_cmd(&temp)
        .arg(&vocab)
        .write_stdin("7\np\n0\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Words beginning with 'p' in 'fruits':"))
        .stdout(predicate::str::contains("pear"))
        .stdout(predicate::str::contains("Words beginning with 'p' in 'animals':"))
        .stdout(predicate::str::contains("pig"));
}

#[test]
fn test_invalid_menu_input_gives_up_after_three_tries() {
    let temp = TempDir::new().unwrap();

    // Three bad answers exhaust the attempts; the implicit 0 then asks for
    // exit confirmation, which EOF answers.
    lexicat_cmd(&temp)
        .write_stdin("x\nhello\n42\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No attempts remaining."));
}

#[test]
fn test_load_failure_keeps_the_session_alive() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.txt");

    let script = format!("8\n{}\n0\nY\n", missing.display());
    lexicat_cmd(&temp)
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not load"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn test_remove_category_with_confirmation() {
    let temp = TempDir::new().unwrap();
    let vocab = temp.path().join("vocab.txt");
    fs::write(&vocab, "#fruits\napple\n\n#animals\ncrab\n").unwrap();

    // Declining the confirmation keeps the category; confirming removes it.
    lexicat_cmd(&temp)
        .arg(&vocab)
        .write_stdin("3\nfruits\nn\n3\nfruits\nY\n6\napple\n0\nY\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removal cancelled."))
        .stdout(predicate::str::contains("'fruits' was successfully removed"))
        .stdout(predicate::str::contains(
            "Category 'animals' does not have the word 'apple'",
        ));
}
