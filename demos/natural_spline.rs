extern crate natural_spline;

use natural_spline::interpolate;

fn main() {

    let x = vec![0.0, 1.0, 2.0, 4.0, 5.0, 6.0];
    let y = vec![1.0, -1.0, 0.0, 3.0, 1.0, 1.0];

    let spline = interpolate(&x, &y).unwrap();

    let x_min = x[0];
    let x_max = x[x.len() - 1];
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    // last knot is outside of the half-open domain
    for i in 0..number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, spline.evaluate(x).unwrap());
    }
}
