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

    let x_vector: Vec<f64> = (0..number_of_steps)
        .map(|i| x_min + step * i as f64)
        .collect();

    let result = spline.batch_evaluate(&x_vector).unwrap();

    println!("x;y");
    for i in 0..number_of_steps {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}
