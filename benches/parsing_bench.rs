use criterion::{Criterion, black_box, criterion_group, criterion_main};

use miniphone::{PHONE_NUMBER_UTIL, PhoneNumberHandle};

use phonenumber::{self as rlp, country::Id};

// (input, region for miniphone, region for rust-phonenumber)
type TestEntity = (&'static str, &'static str, Id);

/// A mix of national, international, vanity and extension inputs.
fn setup_parsing_data() -> Vec<TestEntity> {
    use phonenumber::country::Id::*;
    vec![
        ("(404) 384-1384", "US", US),
        ("011 44 20 8765 4321", "US", US),
        ("+44 20 8765 4321", "GB", GB),
        ("020 8765 4321", "GB", GB),
        // significant leading zero
        ("02 12345678", "IT", IT),
        ("1-800-FLOWERS", "US", US),
        ("0011 1 404 384 1384 ext. 1234", "AU", AU),
        ("tel:+64-3-234-5678", "NZ", NZ),
    ]
}

fn parsing_benchmark(c: &mut Criterion) {
    let numbers_to_parse = setup_parsing_data();

    let mut group = c.benchmark_group("Parsing Comparison");

    group.bench_function("miniphone: parse()", |b| {
        b.iter(|| {
            for (number_str, region, _) in &numbers_to_parse {
                let _ = PHONE_NUMBER_UTIL.parse(black_box(number_str), black_box(region));
            }
        })
    });

    group.bench_function("miniphone: PhoneNumberHandle::new()", |b| {
        b.iter(|| {
            for (number_str, region, _) in &numbers_to_parse {
                black_box(PhoneNumberHandle::new(black_box(*number_str), Some(*region)));
            }
        })
    });

    group.bench_function("rust-phonenumber: parse()", |b| {
        b.iter(|| {
            for (number_str, _, region_id) in &numbers_to_parse {
                let _ = rlp::parse(black_box(Some(*region_id)), black_box(number_str));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
