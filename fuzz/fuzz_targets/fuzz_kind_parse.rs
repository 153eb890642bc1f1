#![no_main]

use libfuzzer_sys::fuzz_target;

use seqview_core::SequenceKind;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // Parsing must never panic, and every accepted kind's label must
    // parse back to the same kind.
    if let Ok(kind) = s.parse::<SequenceKind>() {
        let round_trip = kind
            .label()
            .parse::<SequenceKind>()
            .expect("label must parse");
        assert_eq!(kind, round_trip);
    }
});
