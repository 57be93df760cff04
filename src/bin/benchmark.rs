use radix_spline::Builder;
use rand::{distributions::Uniform, Rng};
use std::time::Instant;

fn main() {
    env_logger::init();

    let range = Uniform::from(0..100_000_000u64);
    let mut data: Vec<u64> = rand::thread_rng()
        .sample_iter(&range)
        .take(10_000_000)
        .collect();

    data.sort_unstable();

    let mut search_keys = vec![];
    let len = data.len();
    search_keys.extend_from_slice(&data[100..110]);
    search_keys.extend_from_slice(&data[1000..1010]);
    search_keys.extend_from_slice(&data[10000..10010]);
    search_keys.extend_from_slice(&data[100000..100010]);
    search_keys.extend_from_slice(&data[500000..500010]);
    search_keys.extend_from_slice(&data[len - 100000..len - 99990]);
    search_keys.extend_from_slice(&data[len - 10000..len - 9990]);
    search_keys.extend_from_slice(&data[len - 1000..len - 990]);
    search_keys.extend_from_slice(&data[len - 100..len - 90]);

    // method 1: plain binary search over the whole array
    let mut total = 0;
    for &key in &search_keys {
        let start = Instant::now();
        if let Ok(idx) = data.binary_search(&key) {
            assert_eq!(data[idx], key);
        } else {
            panic!("Error when binary searching!");
        }
        total += start.elapsed().as_nanos();
    }
    println!(
        "Binary search using {:?} ns",
        total / search_keys.len() as u128
    );

    // method 2: radix spline narrows the range, then binary search within it
    let mut builder = Builder::<u64>::new(data[0], data[len - 1], 18, 32);
    for &key in &data {
        builder.add_key(key).expect("keys must be sorted");
    }
    let radix_spline = builder.finalize();

    let mut total = 0;
    for &key in &search_keys {
        let start = Instant::now();
        let (begin, end) = radix_spline.search_bound(key);
        let slice = &data[begin as usize..end as usize];
        if let Ok(idx) = slice.binary_search(&key) {
            assert_eq!(slice[idx], key);
        } else {
            panic!("Error when radix spline searching!");
        }
        total += start.elapsed().as_nanos();
    }
    println!(
        "RadixSpline search using {:?} ns",
        total / search_keys.len() as u128
    );
}
