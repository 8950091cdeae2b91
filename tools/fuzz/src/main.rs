use afl::fuzz;
use taiwan_id::{
    check, classify, validate_any, validate_business_number, validate_national_id,
    validate_resident_permit_id, IdFormat,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
        println!("Format: {:?}", classify(input));
        println!("Check: {:?}", check(input));
    }

    let format = classify(input);
    let national = validate_national_id(input);
    let resident_permit = validate_resident_permit_id(input);
    let any = validate_any(input);
    let business_number = validate_business_number(input);

    assert_eq!(any, national || resident_permit);
    assert!(!(national && resident_permit));
    assert!(!(any && business_number));

    match check(input) {
        Ok(checked_format) => {
            assert_eq!(checked_format, format);
            assert!(national || resident_permit || business_number);
        }
        Err(_) => assert!(!any && !business_number),
    }

    if format == IdFormat::Invalid {
        assert!(!any && !business_number);
    }

    // Letter case never changes the outcome
    let lowercase = input.to_ascii_lowercase();
    assert_eq!(validate_any(&lowercase), any);
    assert_eq!(classify(&lowercase), format);

    // Results don't depend on earlier calls
    assert_eq!(validate_any(input), any);
}
