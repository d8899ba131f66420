use tonal_store::tonal::catalog::{all_pitches, from_midi, nearest, pitch_at, pitch_class_index};
use tonal_store::tonal::tuning::{equal_tempered_frequencies, validate_tables, TuningConfig};
use tonal_store::tonal::{
    octave_by_label, octave_descriptors, pitch_frequencies, pitch_names, Octave, OCTAVES, PITCH_NAMES,
};
use tonal_store::TonalError;

#[test]
fn test_base_octave_is_equal_tempered() {
    let semitone = 2f64.powf(1.0 / 12.0);
    let freqs = pitch_frequencies();
    for i in 0..11 {
        let ratio = freqs[i + 1] / freqs[i];
        assert!(
            (ratio - semitone).abs() < 1e-9,
            "ratio between {} and {} was {}",
            i,
            i + 1,
            ratio
        );
    }
}

#[test]
fn test_tables_are_index_aligned() {
    assert_eq!(pitch_frequencies().len(), 12);
    assert_eq!(pitch_names().len(), 12);
    assert_eq!(pitch_names()[9], "A");
    assert_eq!(pitch_frequencies()[9], 55.0);
    assert_eq!(pitch_names()[1], "C#/Db");
}

#[test]
fn test_octave_labels_and_multipliers() {
    let octaves = octave_descriptors();
    let labels: Vec<u8> = octaves.iter().map(|o| o.label).collect();
    let multipliers: Vec<u32> = octaves.iter().map(|o| o.multiplier).collect();
    assert_eq!(labels, (0..10).collect::<Vec<u8>>());
    assert_eq!(multipliers, vec![1, 1, 2, 4, 8, 16, 32, 64, 128, 256]);
}

#[test]
fn test_octave_lookup() {
    assert_eq!(octave_by_label(3), Some(Octave::new(3, 4)));
    assert_eq!(octave_by_label(10), None);
}

#[test]
fn test_a_in_octave_two_is_110() {
    let pitch = pitch_at(2, 9).unwrap();
    assert_eq!(pitch.name, "A");
    assert_eq!(pitch.octave, 2);
    assert!((pitch.frequency - 110.0).abs() < 1e-9);
    assert_eq!(pitch.label(), "A2");
}

#[test]
fn test_pitch_at_rejects_out_of_range() {
    assert!(matches!(pitch_at(10, 0), Err(TonalError::UnknownOctave(10))));
    assert!(matches!(
        pitch_at(4, 12),
        Err(TonalError::PitchClassOutOfRange(12))
    ));
}

#[test]
fn test_all_pitches_is_octave_major() {
    let pitches = all_pitches();
    assert_eq!(pitches.len(), 120);
    assert_eq!(pitches[0].label(), "C0");
    assert_eq!(pitches[12].label(), "C1");
    assert_eq!(pitches[119].label(), "B9");
    // Label 0 and label 1 share a multiplier.
    assert_eq!(pitches[0].frequency, pitches[12].frequency);
    let a4 = pitches.iter().find(|p| p.label() == "A4").unwrap();
    assert!((a4.frequency - 440.0).abs() < 1e-9);
}

#[test]
fn test_pitch_class_index_accepts_either_spelling() {
    assert_eq!(pitch_class_index("C#").unwrap(), 1);
    assert_eq!(pitch_class_index("Db").unwrap(), 1);
    assert_eq!(pitch_class_index("A#/Bb").unwrap(), 10);
    assert_eq!(pitch_class_index(" G ").unwrap(), 7);
    assert!(matches!(
        pitch_class_index("H"),
        Err(TonalError::UnknownPitchName(_))
    ));
}

#[test]
fn test_from_midi() {
    let a4 = from_midi(69).unwrap();
    assert_eq!(a4.label(), "A4");
    assert!((a4.frequency - 440.0).abs() < 1e-9);

    let c1 = from_midi(24).unwrap();
    assert_eq!(c1.label(), "C1");

    // Below C1 and above B9 have no entry.
    assert!(from_midi(23).is_none());
    assert!(from_midi(5).is_none());
    assert!(from_midi(127).is_some());
}

#[test]
fn test_nearest_pitch() {
    let pitch = nearest(441.0).unwrap();
    assert_eq!(pitch.label(), "A4");

    let pitch = nearest(33.0).unwrap();
    assert_eq!(pitch.label(), "C1");

    assert!(nearest(0.0).is_none());
    assert!(nearest(f64::NAN).is_none());
}

#[test]
fn test_nearest_agrees_with_midi_in_lowest_octave() {
    for note in 24..36 {
        let from_note = from_midi(note).unwrap();
        let closest = nearest(from_note.frequency).unwrap();
        assert_eq!(closest.label(), from_note.label());
        assert_eq!(closest.octave, 1);
    }
}

#[test]
fn test_default_tuning_reproduces_table() {
    let generated = equal_tempered_frequencies(&TuningConfig::default()).unwrap();
    for (g, f) in generated.iter().zip(pitch_frequencies().iter()) {
        assert!((g - f).abs() < 1e-9, "{} != {}", g, f);
    }
}

#[test]
fn test_tuning_config_from_json() {
    let config = TuningConfig::from_json(r#"{ "reference_frequency": 432.0 }"#).unwrap();
    assert_eq!(config.reference_frequency, 432.0);
    assert_eq!(config.reference_octave, 4);

    let generated = equal_tempered_frequencies(&config).unwrap();
    assert!((generated[9] - 54.0).abs() < 1e-9);

    assert!(matches!(
        TuningConfig::from_json("not json"),
        Err(TonalError::Config(_))
    ));
}

#[test]
fn test_tuning_rejects_non_positive_reference() {
    let config = TuningConfig {
        reference_frequency: 0.0,
        reference_octave: 4,
    };
    assert!(matches!(
        equal_tempered_frequencies(&config),
        Err(TonalError::InvalidReference(_))
    ));
}

#[test]
fn test_builtin_tables_validate() {
    validate_tables(pitch_frequencies(), pitch_names(), &OCTAVES).unwrap();
}

#[test]
fn test_validation_catches_malformed_tables() {
    let freqs = pitch_frequencies();

    assert!(matches!(
        validate_tables(&freqs[..11], &PITCH_NAMES, &OCTAVES),
        Err(TonalError::TableLengthMismatch {
            frequencies: 11,
            names: 12
        })
    ));

    let mut descending = *freqs;
    descending.swap(3, 4);
    assert!(matches!(
        validate_tables(&descending, &PITCH_NAMES, &OCTAVES),
        Err(TonalError::NonIncreasingFrequency { index: 4 })
    ));

    let duplicate = [Octave::new(0, 1), Octave::new(0, 2)];
    assert!(matches!(
        validate_tables(freqs, &PITCH_NAMES, &duplicate),
        Err(TonalError::OctaveLabelOrder {
            label: 0,
            position: 1
        })
    ));

    let zero = [Octave::new(0, 0)];
    assert!(matches!(
        validate_tables(freqs, &PITCH_NAMES, &zero),
        Err(TonalError::ZeroMultiplier { label: 0 })
    ));
}
