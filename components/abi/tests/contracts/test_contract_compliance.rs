//! Contract compliance tests for abi
//!
//! These tests pin the boundary contract: tag ordinals, the byte encodings
//! of each kind, the error taxonomy and the "no values" normalization.

use abi::{
    decode_raw, encode_native, from_values, native, to_values, type_matches, AbiError, AbiResult,
    Address, BigInt, Bytes, NativeValue, Text, Type, Value,
};
use std::any::TypeId;

#[cfg(test)]
mod type_contract_tests {
    use super::*;

    /// Contract: exactly five tags, zero is Invalid
    #[test]
    fn test_type_has_five_members() {
        let known: Vec<Type> = (0..=u8::MAX as u64).filter_map(Type::from_raw).collect();
        assert_eq!(
            known,
            vec![Type::Invalid, Type::Address, Type::Integer, Type::Bytes, Type::String]
        );
    }

    /// Contract: every raw tag has a name, unknown ones share a fallback
    #[test]
    fn test_every_raw_tag_is_nameable() {
        for raw in [0u64, 1, 2, 3, 4, 5, 64, u64::MAX] {
            assert!(!Type::name_of(raw).is_empty());
        }
        assert_eq!(Type::name_of(5), Type::name_of(u64::MAX));
    }

    /// Contract: compatibility is a predicate, never an error
    #[test]
    fn test_compatibility_is_pure_predicate() {
        let _: bool = type_matches(Type::Invalid, TypeId::of::<Text>());
        assert!(type_matches(Type::String, TypeId::of::<Text>()));
    }
}

#[cfg(test)]
mod codec_contract_tests {
    use super::*;

    /// Contract: {Bytes, [1,2,3]} <-> [1,2,3]
    #[test]
    fn test_bytes_scenario() {
        let value = Value::Bytes(Bytes::from_static(&[0x01, 0x02, 0x03]));
        assert_eq!(&value.encode()[..], &[0x01, 0x02, 0x03]);
        assert_eq!(decode_raw(vec![0x01, 0x02, 0x03], 3).unwrap(), value);
    }

    /// Contract: {Integer, 300} <-> [0x01, 0x2C]
    #[test]
    fn test_integer_scenario() {
        let value = Value::Integer(BigInt::from(300));
        assert_eq!(&value.encode()[..], &[0x01, 0x2c]);
        assert_eq!(decode_raw(vec![0x01, 0x2c], 2).unwrap(), value);
    }

    /// Contract: {String, "hi"} <-> [0x68, 0x69]
    #[test]
    fn test_string_scenario() {
        let value = Value::String(Text::from("hi"));
        assert_eq!(&value.encode()[..], &[0x68, 0x69]);
        assert_eq!(decode_raw(vec![0x68, 0x69], 4).unwrap(), value);
    }

    /// Contract: text is not validated, malformed bytes pass through
    #[test]
    fn test_string_bytes_pass_through() {
        let value = decode_raw(vec![0x68, 0xff, 0x69], 4).unwrap();
        assert_eq!(value.ty(), Type::String);
        assert_eq!(&value.encode()[..], &[0x68, 0xff, 0x69]);
    }

    /// Contract: negative integers decode as their magnitude
    #[test]
    fn test_integer_sign_is_not_encoded() {
        let encoded = Value::Integer(BigInt::from(-7)).encode();
        assert_eq!(
            Value::decode(encoded, Type::Integer).unwrap(),
            Value::Integer(BigInt::from(7))
        );
    }

    /// Contract: Invalid fails both directions with InvalidType
    #[test]
    fn test_invalid_fails_both_directions() {
        let encoded: AbiResult<Bytes> = encode_native(0, &Bytes::new());
        assert_eq!(encoded, Err(AbiError::InvalidType));
        assert_eq!(Value::decode(Bytes::new(), Type::Invalid), Err(AbiError::InvalidType));
    }

    /// Contract: Value encode is infallible and returns Bytes
    #[test]
    fn test_value_encode_signature() {
        let _: Bytes = Value::from(Address::default()).encode();
    }
}

#[cfg(test)]
mod bulk_contract_tests {
    use super::*;

    /// Contract: ToValues(["hi", 300]) and back
    #[test]
    fn test_bulk_scenario() {
        let values = to_values(vec![native(Text::from("hi")), native(BigInt::from(300))])
            .unwrap()
            .unwrap();
        assert_eq!(values, vec![Value::from("hi"), Value::from(BigInt::from(300))]);

        let natives: Vec<NativeValue> = from_values(values).unwrap();
        assert_eq!(natives[0].downcast_ref::<Text>().map(Text::as_bytes), Some(&b"hi"[..]));
        assert_eq!(natives[1].downcast_ref::<BigInt>(), Some(&BigInt::from(300)));
    }

    /// Contract: an owned payload is accepted as-is or re-boxed
    #[test]
    fn test_boxed_payload_call_shapes() {
        let payload: NativeValue = native(BigInt::from(300));
        assert_eq!(&encode_native(2, &payload).unwrap()[..], &[0x01, 0x2c]);
        assert_eq!(
            to_values(vec![native(payload)]),
            Ok(Some(vec![Value::from(300u64)]))
        );
    }

    /// Contract: empty and absent inputs are both "no values"
    #[test]
    fn test_no_values_normalization() {
        assert_eq!(to_values(Vec::new()), to_values(None::<Vec<NativeValue>>));
        assert_eq!(to_values(Vec::new()), Ok(None));
        assert!(from_values(Vec::new()).is_none());
        assert!(from_values(None::<Vec<Value>>).is_none());
    }

    /// Contract: UnsupportedType carries the offending type's name
    #[test]
    fn test_unsupported_type_error() {
        let err = to_values(vec![native(())]).unwrap_err();
        assert_eq!(err, AbiError::UnsupportedType("()"));
        assert_eq!(err.to_string(), "unsupported type: ()");
    }
}

#[cfg(test)]
mod thread_safety_contract_tests {
    use super::*;

    /// Contract: codec types can be shared across threads
    #[test]
    fn test_types_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Type>();
        assert_send_sync::<Value>();
        assert_send_sync::<AbiError>();
    }

    #[test]
    fn test_concurrent_encoding() {
        let value = Value::from(BigInt::from(300));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let value = value.clone();
                std::thread::spawn(move || value.encode())
            })
            .collect();
        for handle in handles {
            assert_eq!(&handle.join().unwrap()[..], &[0x01, 0x2c]);
        }
    }
}
