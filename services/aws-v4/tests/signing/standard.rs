use anyhow::Result;
use http::{HeaderMap, HeaderValue, Method};
use log::debug;
use pretty_assertions::assert_eq;
use s3sign_aws_v4::{Payload, EMPTY_STRING_SHA256};

use super::{example_signer, signature_of, signed_headers_of};

#[test]
fn test_get_object() -> Result<()> {
    let mut headers = HeaderMap::new();
    headers.insert("range", HeaderValue::from_static("bytes=0-9"));

    let signed = example_signer().auth_header_v4(
        Method::GET,
        "https://examplebucket.s3.amazonaws.com/test.txt",
        headers,
        Payload::Empty,
    )?;
    debug!("signed headers: {signed:?}");

    assert_eq!(signed_headers_of(&signed), "host;range;x-amz-content-sha256;x-amz-date");
    assert_eq!(
        signature_of(&signed),
        "f0e8bdb87c964420e857bd35b5d6ed310bd44f0170aba48dd91039c6036bdb41"
    );
    assert_eq!(signed["x-amz-content-sha256"], EMPTY_STRING_SHA256);
    assert_eq!(signed["x-amz-date"], "20130524T000000Z");
    assert_eq!(signed["host"], "examplebucket.s3.amazonaws.com");
    Ok(())
}

#[test]
fn test_put_object() -> Result<()> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "date",
        HeaderValue::from_static("Fri, 24 May 2013 00:00:00 GMT"),
    );
    headers.insert(
        "x-amz-storage-class",
        HeaderValue::from_static("REDUCED_REDUNDANCY"),
    );

    let signed = example_signer().auth_header_v4(
        Method::PUT,
        "https://examplebucket.s3.amazonaws.com/test%24file.text",
        headers,
        Payload::from("Welcome to Amazon S3."),
    )?;

    assert_eq!(
        signed_headers_of(&signed),
        "date;host;x-amz-content-sha256;x-amz-date;x-amz-storage-class"
    );
    assert_eq!(
        signature_of(&signed),
        "98ad721746da40c64f1a55b78f14c238d841ea1380cd77a1b5971af0ece108bd"
    );
    assert_eq!(
        signed["x-amz-content-sha256"],
        "44ce7dd67c959e0d3524ffac1771dfbba87d2b6b4b4e99e42034a8b803f8b072"
    );
    assert_eq!(signed["content-length"], "21");
    assert_eq!(signed["content-type"], "text");
    assert!(signed.contains_key("content-md5"));
    Ok(())
}

#[test]
fn test_get_bucket_lifecycle() -> Result<()> {
    let signed = example_signer().auth_header_v4(
        Method::GET,
        "https://examplebucket.s3.amazonaws.com/?lifecycle",
        HeaderMap::new(),
        Payload::Empty,
    )?;

    assert_eq!(signed_headers_of(&signed), "host;x-amz-content-sha256;x-amz-date");
    assert_eq!(
        signature_of(&signed),
        "fea454ca298b7da1c68078a5d1bdbfbbe0d65c699e0f91ac7a200a0136783543"
    );
    Ok(())
}

#[test]
fn test_list_objects() -> Result<()> {
    let signed = example_signer().auth_header_v4(
        Method::GET,
        "https://examplebucket.s3.amazonaws.com/?max-keys=2&prefix=J",
        HeaderMap::new(),
        Payload::Empty,
    )?;

    assert_eq!(
        signature_of(&signed),
        "34b48302e7b5fa45bde8084f4b7868a86f0a534bc59db6670ed5711ef69dc6f7"
    );
    Ok(())
}

#[test]
fn test_query_order_does_not_matter() -> Result<()> {
    let signer = example_signer();

    let a = signer.auth_header_v4(
        Method::GET,
        "https://examplebucket.s3.amazonaws.com/?prefix=J&max-keys=2",
        HeaderMap::new(),
        Payload::Empty,
    )?;
    let b = signer.auth_header_v4(
        Method::GET,
        "https://examplebucket.s3.amazonaws.com/?max-keys=2&prefix=J",
        HeaderMap::new(),
        Payload::Empty,
    )?;

    assert_eq!(signature_of(&a), signature_of(&b));
    Ok(())
}
