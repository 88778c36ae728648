use arc4_core::abi_type::{parse_tuple, ReferenceType, TransactionType};
use arc4_core::errors::ErrorKind;
use arc4_core::{AbiType, ArgType, Method, ReturnType};

#[test]
fn test_parse_reference_signature() {
    let m = Method::from_signature("someMethod(uint64,ufixed64x2,(uint64,uint64,uint64)[],bool)void")
        .unwrap();

    assert_eq!(m.name(), "someMethod");
    let types: Vec<String> = m.args().iter().map(|a| a.to_string()).collect();
    assert_eq!(
        types,
        ["uint64", "ufixed64x2", "(uint64,uint64,uint64)[]", "bool"]
    );
    assert!(m.returns().is_void());
    assert_eq!(m.selector().to_hex(), "291272a7");
}

#[test]
fn test_nested_tuple_arguments() {
    let m = Method::from_signature("f((uint8,(bool,string)),byte[32])(address,uint16)").unwrap();
    assert_eq!(m.args().len(), 2);
    assert_eq!(
        m.args()[0].arg_type(),
        &ArgType::Value(AbiType::Tuple(vec![
            AbiType::Uint(8),
            AbiType::Tuple(vec![AbiType::Bool, AbiType::String]),
        ]))
    );
    assert_eq!(
        m.args()[1].arg_type(),
        &ArgType::Value(AbiType::StaticArray(Box::new(AbiType::Byte), 32))
    );
    assert_eq!(
        m.returns().return_type(),
        &ReturnType::Value(AbiType::Tuple(vec![AbiType::Address, AbiType::Uint(16)]))
    );
    assert_eq!(m.signature(), "f((uint8,(bool,string)),byte[32])(address,uint16)");
}

#[test]
fn test_transaction_and_reference_arguments() {
    let m = Method::from_signature("optin(axfer,asset,account,application,txn)void").unwrap();
    assert_eq!(
        m.args()[0].arg_type(),
        &ArgType::Transaction(TransactionType::AssetTransfer)
    );
    assert_eq!(m.args()[1].arg_type(), &ArgType::Reference(ReferenceType::Asset));
    assert_eq!(m.args()[2].arg_type(), &ArgType::Reference(ReferenceType::Account));
    assert_eq!(m.txn_calls(), 3);
}

#[test]
fn test_empty_argument_list() {
    let m = Method::from_signature("noop()void").unwrap();
    assert!(m.args().is_empty());
    assert_eq!(m.selector().to_hex(), "e83a87ab");
}

#[test]
fn test_malformed_signatures() {
    for sig in ["add", "add(uint64", "add)uint64(", ""] {
        let err = Method::from_signature(sig).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::MalformedSignature,
            "signature {:?} should be malformed",
            sig
        );
    }
}

#[test]
fn test_unknown_types_in_signature() {
    for sig in [
        "f(uint7)void",
        "f(uint520)void",
        "f(ufixed64x0)void",
        "f(int64)void",
        "f(uint64,)void",
        "f(bool[01])void",
        "f()",
    ] {
        let err = Method::from_signature(sig).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownType, "signature {:?}", sig);
    }
}

#[test]
fn test_parse_tuple_top_level_split() {
    assert_eq!(
        parse_tuple("uint64,(bool,byte),string").unwrap(),
        ["uint64", "(bool,byte)", "string"]
    );
    assert!(parse_tuple("").unwrap().is_empty());
    assert_eq!(
        parse_tuple("(bool,byte").unwrap_err().kind(),
        ErrorKind::MalformedSignature
    );
    assert_eq!(parse_tuple(",bool").unwrap_err().kind(), ErrorKind::UnknownType);
}
