use parrot_core::DisassemblyDump;

#[test]
fn splits_on_every_line_terminator() {
    let dump = DisassemblyDump::from_text("a\nb\r\nc\rd");
    assert_eq!(dump.lines(), ["a", "b", "c", "d"]);
}

#[test]
fn trailing_terminator_adds_no_line() {
    assert_eq!(DisassemblyDump::from_text("a\n").len(), 1);
    assert_eq!(DisassemblyDump::from_text("\n").lines(), [""]);
    assert!(DisassemblyDump::from_text("").is_empty());
}

#[test]
fn keeps_trailing_whitespace() {
    let dump = DisassemblyDump::from_text("        pushfalse     \t\n        pushtrue");
    assert_eq!(dump.lines()[0], "        pushfalse     \t");
}

#[test]
fn contains_searches_each_line() {
    let dump = DisassemblyDump::from_lines(["first", "var resourceModuleURLs:String"]);
    assert!(dump.contains("resourceModuleURLs"));
    assert!(!dump.contains("first\nvar"));
}
