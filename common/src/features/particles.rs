use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use tracing::debug;

use crate::{
    context::Ctx,
    page::{EventKind, Page, Surface, Target},
};

pub const MAX_SIZE: f64 = 2.0;
pub const MAX_SPEED: f64 = 1.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub vx: f64,
    pub vy: f64,
    pub color: String,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f64, height: f64) -> Self {
        Particle {
            x: rng.random::<f64>() * width,
            y: rng.random::<f64>() * height,
            size: rng.random::<f64>() * MAX_SIZE,
            vx: (rng.random::<f64>() - 0.5) * MAX_SPEED,
            vy: (rng.random::<f64>() - 0.5) * MAX_SPEED,
            color: format!("hsl({}, 70%, 60%)", rng.random_range(0..360)),
        }
    }
}

// moves one coordinate, bouncing off either end of [0, limit]
//
// the position is pinned to the bound it crossed so it can never drift outside
fn bounce(position: &mut f64, velocity: &mut f64, limit: f64) {
    let next = *position + *velocity;

    if next < 0.0 || next > limit {
        *velocity = -*velocity;
        *position = next.clamp(0.0, limit.max(0.0));
    } else {
        *position = next;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Field {
    pub particles: Vec<Particle>,
    pub width: f64,
    pub height: f64,
}

impl Field {
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
    }

    pub fn step(&mut self) {
        for p in &mut self.particles {
            bounce(&mut p.x, &mut p.vx, self.width);
            bounce(&mut p.y, &mut p.vy, self.height);
        }
    }

    pub fn draw(&self, surface: &dyn Surface) {
        surface.clear();
        for p in &self.particles {
            surface.dot(p.x, p.y, p.size, &p.color);
        }
    }
}

fn reset<P: Page>(ctx: &Ctx<P>, field: &RefCell<Field>, surface: &dyn Surface) {
    let viewport = ctx.page.viewport();
    surface.resize(viewport.width, viewport.height);

    ctx.with_rng(|rng| {
        field.borrow_mut().populate(
            rng,
            ctx.config.particle_count,
            viewport.width,
            viewport.height,
        )
    });

    debug!(
        width = viewport.width,
        height = viewport.height,
        "regenerated particle field"
    );
}

fn frame<P: Page>(ctx: Rc<Ctx<P>>, field: Rc<RefCell<Field>>, surface: Rc<dyn Surface>) {
    {
        let mut field = field.borrow_mut();
        field.draw(surface.as_ref());
        field.step();
    }

    let again = Rc::clone(&ctx);
    ctx.tasks
        .next_frame(move |_| frame(again, field, surface));
}

// full viewport canvas of drifting dots behind the page content
pub fn particles<P: Page>(ctx: &Rc<Ctx<P>>) {
    let Some(canvas) = ctx.page.create("canvas", "bg-animation") else {
        return;
    };
    ctx.page.append(&ctx.page.body(), &canvas);

    let Some(surface) = ctx.page.surface(&canvas) else {
        debug!("no 2d context available, skipping particle background");
        return;
    };
    let surface: Rc<dyn Surface> = Rc::from(surface);
    let field = Rc::new(RefCell::new(Field::default()));

    reset(ctx, &field, surface.as_ref());
    frame(Rc::clone(ctx), Rc::clone(&field), Rc::clone(&surface));

    let c = Rc::clone(ctx);
    ctx.on(Target::Window, EventKind::Resize, move |_| {
        reset(&c, &field, surface.as_ref())
    });
}
