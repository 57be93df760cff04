use radix_spline::Builder;
use rand::{distributions::Uniform, Rng};
use std::time::Instant;

fn main() {
    env_logger::init();

    let range = Uniform::from(0..10_000_000u64);
    let mut data: Vec<u64> = rand::thread_rng()
        .sample_iter(&range)
        .take(1_000_000)
        .collect();

    let value = 2000;
    data.push(value);
    data.sort_unstable();

    let mut builder = Builder::<u64>::default_for(data[0], *data.last().unwrap());
    for &key in &data {
        builder.add_key(key).expect("keys must be sorted");
    }
    let radix_spline = builder.finalize();

    let start = Instant::now();
    let (begin, end) = radix_spline.search_bound(value);
    let slice = &data[begin as usize..end as usize];
    let found = slice.binary_search(&value).is_ok();
    let elapsed = start.elapsed();

    println!(
        "The search key is in the range: [{begin}, {end})  (found = {found})"
    );
    println!("RadixSpline search using {:?} ns", elapsed.as_nanos());

    let start = Instant::now();
    let found = data.binary_search(&value).is_ok();
    let elapsed = start.elapsed();
    println!("Binary search using {:?} ns (found = {found})", elapsed.as_nanos());
}
