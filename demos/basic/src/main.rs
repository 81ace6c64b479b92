use std::error::Error;

use toolbox::math::{Angle, Vector, Vector2};
use toolbox::util::{array_ensure_size, is_string_kebab};
use toolbox::{num, random, TypedMap};

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::formatted_timed_builder()
        .parse_env(env_logger::Env::default().filter_or(
            env_logger::DEFAULT_FILTER_ENV,
            if cfg!(debug_assertions) {
                "debug"
            } else {
                "warn"
            },
        ))
        .init();

    let mut args = std::env::args().skip(1);
    let a: Vector = args.next().as_deref().unwrap_or("[3, 6]").parse()?;
    let b: Vector = args.next().as_deref().unwrap_or("[2, 1, -3]").parse()?;
    log::info!("a = {a}, b = {b}");

    println!("a + b      = {}", &a + &b);
    println!("a - b      = {}", a.subtract(&b));
    println!("a * b      = {}", a.multiply(&b));
    println!("a / b      = {}", a.divide(&b));
    println!("|a|        = {}", a.magnitude());
    println!("a^         = {}", a.normalize());
    println!("diff(a, b) = {}", a.difference(&b));

    let p = Vector2::from_vector(&a);
    let q = Vector2::from_vector(&b);
    println!("p          = {p}");
    println!("dist(p, q) = {}", p.distance(q));
    println!("angle      = {:.3} deg", p.angle_between(q).to_degrees());
    println!("p rot 90   = {}", p.rotate_by(Angle::frac_pi_2()));

    let mut lengths = TypedMap::new();
    lengths.insert("a", a.magnitude())?;
    lengths.insert("b", b.magnitude())?;
    if let Err(err) = lengths.insert("p", p) {
        log::warn!("{err}");
    }
    for (name, length) in lengths.iter::<f64>() {
        println!("len({name})     = {length}");
    }

    let padded = array_ensure_size(a.as_slice(), 4, 0.);
    let bytes: Vec<u8> = padded.iter().map(|&v| num::clamp_byte(v * 16.)).collect();
    println!("bytes      = {bytes:?}");
    let uid = random::create_uid(&mut rand::thread_rng());
    println!("uid        = {uid} (kebab: {})", is_string_kebab(&uid, false));

    Ok(())
}
