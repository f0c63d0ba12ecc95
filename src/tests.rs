//! Tests for the QDPI glyph codec

use crate::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn arb_axis<A: Axis + std::fmt::Debug>() -> impl Strategy<Value = A> {
    proptest::sample::select(A::ALL)
}

prop_compose! {
    fn arb_glyph()(
        action in arb_axis::<Action>(),
        context in arb_axis::<Context>(),
        state in arb_axis::<State>(),
        role in arb_axis::<Role>(),
        relation in arb_axis::<Relation>(),
        polarity in arb_axis::<Polarity>(),
        rotation in arb_axis::<Rotation>(),
        modality in arb_axis::<Modality>()
    ) -> Glyph {
        Glyph { action, context, state, role, relation, polarity, rotation, modality }
    }
}

#[test]
fn test_all_zero_glyph_encodes_to_zero() {
    let g = Glyph {
        action: Action::Read,
        context: Context::Page,
        state: State::Public,
        role: Role::Human,
        relation: Relation::SubjectToObject,
        polarity: Polarity::Internal,
        rotation: Rotation::N,
        modality: Modality::Text,
    };
    assert_eq!(encode_numeric(&g).value(), 0);
}

#[test]
fn test_dream_glyph_roundtrip() {
    let g = Glyph {
        action: Action::Dream,
        context: Context::Prompt,
        state: State::Sacrifice,
        role: Role::PartSystem,
        relation: Relation::ObjectToSubject,
        polarity: Polarity::Internal,
        rotation: Rotation::S,
        modality: Modality::Tactile,
    };
    assert_eq!(decode_numeric(encode_numeric(&g).value()).unwrap(), g);
    assert_eq!(decode_string(&encode_string(&g)).unwrap(), g);
}

#[test]
fn test_omitted_modality_roundtrips_as_text() {
    let raw = RawGlyph {
        action: 4,
        context: 2,
        state: 1,
        role: 1,
        relation: 0,
        polarity: 1,
        rotation: 3,
        modality: None,
    };
    let code = encode_numeric_raw(&raw).unwrap();
    let decoded = decode_numeric(code.value()).unwrap();
    assert_eq!(decoded.modality, Modality::Text);
    assert_eq!(RawGlyph::from(decoded), RawGlyph { modality: Some(0), ..raw });

    let s = encode_string_raw(&raw).unwrap();
    assert_eq!(s, "42110130");
    assert_eq!(decode_string(&s[..7]).unwrap(), decoded);
}

#[test]
fn test_pack_one_two_three() {
    let packed = pack_qdpi_glyphs(&[1, 2, 3]).unwrap();
    assert_eq!(packed.len(), (3 * 17 + 7) / 8);
    assert_eq!(unpack_qdpi_glyphs(&packed), vec![1, 2, 3]);
}

#[test]
fn test_pack_failure_emits_nothing() {
    let result = pack_qdpi_glyphs(&[10, 20, 131072, 30]);
    match result {
        Err(GlyphError::Range { value, width, index }) => {
            assert_eq!((value, width, index), (131072, 17, 2));
        }
        Ok(bytes) => panic!("expected range error, got {} bytes", bytes.len()),
        Err(e) => panic!("unexpected error {}", e),
    }
    assert!(pack_qdpi_glyphs(&[-1]).is_err());
}

#[test]
fn test_hundred_codes() {
    // xorshift keeps the sequence reproducible
    let mut x: u32 = 0x9E37_79B9;
    let codes: Vec<i64> = (0..100)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            i64::from(x & QDPI_PACKED_MAX)
        })
        .collect();
    let packed = pack_qdpi_glyphs(&codes).unwrap();
    assert_eq!(packed.len(), 213);
    let unpacked: Vec<i64> = unpack_qdpi_glyphs(&packed).into_iter().map(i64::from).collect();
    assert_eq!(unpacked, codes);
}

#[test]
fn test_code_fits_packed_width_below_vr() {
    // modalities Text..AR keep the top layout bit clear, so the code
    // fits a 17-bit QDPI stream
    let g = Glyph {
        action: Action::Dream,
        context: Context::Generation,
        state: State::Gift,
        role: Role::PartSystem,
        relation: Relation::ObjectToSubject,
        polarity: Polarity::External,
        rotation: Rotation::W,
        modality: Modality::AR,
    };
    let code = encode_numeric(&g).value();
    assert!(code <= QDPI_PACKED_MAX);
    let packed = pack_qdpi_glyphs(&[i64::from(code)]).unwrap();
    assert_eq!(unpack_qdpi_glyphs(&packed), vec![code]);

    let vr = encode_numeric(&g.with_modality(Modality::VR)).value();
    assert!(pack_qdpi_glyphs(&[i64::from(vr)]).is_err());
}

proptest! {
    #[test]
    fn prop_numeric_roundtrip(g in arb_glyph()) {
        let code = encode_numeric(&g);
        prop_assert!(code.value() <= MAX_GLYPH_CODE);
        prop_assert_eq!(decode_numeric(code.value()).unwrap(), g);
    }

    #[test]
    fn prop_string_roundtrip(g in arb_glyph()) {
        let s = encode_string(&g);
        prop_assert_eq!(s.len(), GLYPH_STRING_LEN);
        prop_assert_eq!(decode_string(&s).unwrap(), g);
    }

    #[test]
    fn prop_packed_roundtrip(codes in proptest::collection::vec(0..=i64::from(QDPI_PACKED_MAX), 0..200)) {
        let packed = pack_qdpi_glyphs(&codes).unwrap();
        prop_assert_eq!(packed.len(), (codes.len() * 17 + 7) / 8);
        let unpacked: Vec<i64> = unpack_qdpi_glyphs(&packed).into_iter().map(i64::from).collect();
        prop_assert_eq!(unpacked, codes);
    }

    #[test]
    fn prop_any_width_roundtrip(width in 1u32..=32, raw in proptest::collection::vec(any::<u32>(), 0..64)) {
        let packer = BitPacker::new(width).unwrap();
        let codes: Vec<i64> = raw.iter().map(|&c| i64::from(c & packer.max_code())).collect();
        let packed = packer.pack(&codes).unwrap();
        let unpacked = packer.unpack(&packed);
        // padding may hold whole zero codes only when width < 8
        prop_assert!(unpacked.len() >= codes.len());
        prop_assert!(unpacked[codes.len()..].iter().all(|&c| c == 0));
        let head: Vec<i64> = unpacked[..codes.len()].iter().map(|&c| i64::from(c)).collect();
        prop_assert_eq!(head, codes);
    }

    #[test]
    fn prop_glyph_stream_roundtrip(glyphs in proptest::collection::vec(arb_glyph(), 0..50)) {
        let packed = pack_glyphs(&glyphs);
        let unpacked = unpack_glyphs(&packed).unwrap();
        prop_assert_eq!(unpacked, glyphs);
    }

    #[test]
    fn prop_unpack_is_total(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let codes = unpack_qdpi_glyphs(&bytes);
        prop_assert_eq!(codes.len(), bytes.len() * 8 / 17);
        prop_assert!(codes.iter().all(|&c| c <= QDPI_PACKED_MAX));
    }
}
