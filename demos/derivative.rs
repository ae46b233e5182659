extern crate natural_spline;

use natural_spline::interpolate;

fn main() {

    let x: Vec<f64> = (0..=10).map(|i| i as f64 * std::f64::consts::PI / 10.0).collect();
    let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();

    let spline = interpolate(&x, &y).unwrap();
    let slope = spline.derivative();
    let curvature = slope.derivative();

    println!("x;y;dy;d2y");
    for i in 0..40 {
        let x = i as f64 * std::f64::consts::PI / 40.0;
        println!(
            "{:.3};{:.4};{:.4};{:.4}",
            x,
            spline.evaluate(x).unwrap(),
            slope.evaluate(x).unwrap(),
            curvature.evaluate(x).unwrap()
        );
    }
}
