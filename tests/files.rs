use std::fs;

use img2tool::*;
use tempfile::tempdir;

#[test]
fn create_list_extract_roundtrip() {
    let dir = tempdir().unwrap();
    let payload_path = dir.path().join("kernel.bin");
    let image_path = dir.path().join("kernel.img2");
    let out_path = dir.path().join("kernel.out");

    let payload: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
    fs::write(&payload_path, &payload).unwrap();

    let params = Img2Params::builder("krnl".parse().unwrap())
        .extension(parse_extension("vers=1.0").unwrap())
        .extension(parse_extension("salt-00112233").unwrap())
        .build();
    create_image(&params, Some(payload_path.as_path()), &image_path).unwrap();

    let image = fs::read(&image_path).unwrap();
    assert_eq!(image.len(), 0x1000);

    let info = verify_image(&image_path).unwrap();
    assert_eq!(info.header.identifier.to_string(), "krnl");
    assert_eq!(info.header.data_size as usize, payload.len());
    assert_eq!(info.extensions.len(), 2);
    assert_eq!(info.extensions[1].data, [0x00, 0x11, 0x22, 0x33]);

    extract_payload(&image_path, &out_path).unwrap();
    assert_eq!(fs::read(&out_path).unwrap(), payload);
}

#[test]
fn create_without_payload_file() {
    let dir = tempdir().unwrap();
    let image_path = dir.path().join("empty.img2");

    create_image(&Img2Params::new("test".parse().unwrap()), None, &image_path).unwrap();

    let image = fs::read(&image_path).unwrap();
    assert_eq!(image.len(), PAGE_SIZE);
    let text = describe_image_bytes(&image).unwrap();
    assert!(text.contains("type         : test\n"));
    assert!(!text.contains("Ext 0:"));
}

#[test]
fn failed_create_writes_nothing() {
    let dir = tempdir().unwrap();
    let image_path = dir.path().join("full.img2");

    let params = Img2Params::builder("krnl".parse().unwrap())
        .extension(Extension::new("blob".parse().unwrap(), vec![0; EXT_AREA_SIZE]))
        .build();
    let err = create_image(&params, None, &image_path).unwrap_err();
    assert!(matches!(err, Img2Error::ExtensionAreaExhausted { .. }));
    assert!(!image_path.exists());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = read_image(dir.path().join("nope.img2")).unwrap_err();
    assert!(matches!(err, Img2Error::Io(_)));
}

#[test]
fn corrupt_file_is_rejected() {
    let dir = tempdir().unwrap();
    let image_path = dir.path().join("corrupt.img2");
    let out_path = dir.path().join("corrupt.out");

    let params = Img2Params::builder("krnl".parse().unwrap())
        .extension(parse_extension("vers=2.0").unwrap())
        .build();
    let mut image = create_image_bytes(&params, b"data").unwrap();
    // flip a data byte of the first extension
    image[HEADER_FIXED_SIZE + EXT_NODE_SIZE] ^= 0x20;
    fs::write(&image_path, &image).unwrap();

    let err = extract_payload(&image_path, &out_path).unwrap_err();
    assert!(matches!(err, Img2Error::ExtensionChecksumMismatch { index: 0, .. }));
    assert_eq!(err.to_string().split(' ').take(3).collect::<Vec<_>>(), ["ext", "0", "CRC32"]);
    assert!(!out_path.exists());
}
