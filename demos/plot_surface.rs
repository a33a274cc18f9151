extern crate plotters;
use plotters::prelude::*;

extern crate bezier_surface;
use bezier_surface::{BezierSurface, ControlGrid, Point, PointN};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // control points of a bicubic patch with a bump in the middle
    let rows: Vec<Vec<PointN<f64, 3>>> = (0..4)
        .map(|i| {
            (0..4)
                .map(|j| {
                    let z = if (1..3).contains(&i) && (1..3).contains(&j) { 2.0 } else { 0.0 };
                    PointN::new([j as f64, i as f64, z])
                })
                .collect()
        })
        .collect();

    let surface = BezierSurface::new(ControlGrid::<PointN<f64, 3>>::from_rows(&rows)?);

    let root = BitMapBackend::new("bicubic_surface.png", (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Bicubic Bezier Surface", ("sans-serif", 21).into_font())
        .margin(5)
        .build_cartesian_3d(-0.5..3.5, -0.5..2.5, -0.5..3.5)?;

    chart.with_projection(|mut pb| {
        pb.yaw = 0.6;
        pb.pitch = 0.4;
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart.configure_axes().draw()?;

    // plotters' y axis points up, so the surface height goes there
    let to_coord = |p: PointN<f64, 3>| (p.axis(0), p.axis(2), p.axis(1));

    // draw the control net
    for row in surface.grid().rows() {
        chart.draw_series(LineSeries::new(row.iter().map(|&p| to_coord(p)), &BLUE))?;
    }
    chart
        .draw_series(PointSeries::of_element(
            surface.grid().rows().flatten().map(|&p| to_coord(p)),
            3,
            &BLUE,
            &|coord, size, style| EmptyElement::at(coord) + Circle::new((0, 0), size, style.filled()),
        ))?
        .label("Control Net")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // render iso-curves of the surface in both parameter directions
    let nlines: usize = 10;
    let nsteps: usize = 100;
    for k in 0..=nlines {
        let s = k as f64 / nlines as f64;
        let along_u = surface.curve_at_v(s);
        let along_v = surface.curve_at_u(s);
        let samples = |curve: &bezier_surface::Bezier<PointN<f64, 3>>| -> Vec<(f64, f64, f64)> {
            (0..=nsteps)
                .map(|t| to_coord(curve.eval(t as f64 / nsteps as f64)))
                .collect()
        };
        chart.draw_series(LineSeries::new(samples(&along_u), &RED))?;
        chart.draw_series(LineSeries::new(samples(&along_v), &RED))?;
    }

    // mark the center of the patch
    let center = surface.eval(0.5, 0.5);
    chart
        .draw_series(PointSeries::of_element(
            vec![to_coord(center)],
            5,
            &GREEN,
            &|coord, size, style| {
                EmptyElement::at(coord)
                    + Circle::new((0, 0), size, style.filled())
                    + Text::new(format!("r(0.5, 0.5) = {}", center), (0, 15), ("sans-serif", 15).into_font())
            },
        ))?
        .label("r(0.5, 0.5)")
        .legend(|(x, y)| Circle::new((x + 10, y), 4, GREEN.filled()));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
