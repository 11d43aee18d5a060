//! The sketches the studio can show.

use easel::Context;

/// Clock face: white dial with a 4px rim, a center dot and four hour ticks.
pub fn clock(ctx: &mut Context<'_>) -> anyhow::Result<()> {
    let (cx, cy) = (126.0, 140.0);

    let bg = ctx.rgb(230, 240, 200);
    ctx.background(bg);
    ctx.fill(ctx.white());
    ctx.stroke(ctx.black());
    ctx.strokewidth(4);
    ctx.oval(cx - 102.0, cy - 102.0, 204.0, 204.0);

    ctx.fill(ctx.black());
    ctx.nostroke();
    ctx.oval(cx - 5.0, cy - 5.0, 10.0, 10.0);

    ctx.stroke(ctx.black());
    ctx.strokewidth(1);
    ctx.line(cx, cy - 102.0, cx, cy - 95.0);
    ctx.line(cx - 102.0, cy, cx - 95.0, cy);
    ctx.line(cx + 95.0, cy, cx + 102.0, cy);
    ctx.line(cx, cy + 95.0, cx, cy + 102.0);
    Ok(())
}

/// Outlined ring with a small unoutlined dot next to it.
pub fn dot(ctx: &mut Context<'_>) -> anyhow::Result<()> {
    ctx.background(ctx.white());
    ctx.stroke(ctx.black());
    ctx.strokewidth(4);
    ctx.oval(24.0, 38.0, 102.0, 102.0);

    ctx.fill(ctx.black());
    ctx.nostroke();
    ctx.oval(121.0, 135.0, 5.0, 5.0);
    Ok(())
}

/// Looks up a sketch by name.
pub fn by_name(name: &str) -> Option<fn(&mut Context<'_>) -> anyhow::Result<()>> {
    match name {
        "clock" => Some(clock),
        "dot" => Some(dot),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel::Sketch;

    #[test]
    fn known_names_resolve() {
        assert!(by_name("clock").is_some());
        assert!(by_name("dot").is_some());
        assert!(by_name("sundial").is_none());
    }

    #[test]
    fn clock_records_fourteen_ops() {
        let canvas = Sketch::new("clock").script(clock).record().unwrap();
        assert_eq!(canvas.len(), 14);
    }

    #[test]
    fn dot_records_seven_ops() {
        let canvas = Sketch::new("dot").script(dot).record().unwrap();
        assert_eq!(canvas.len(), 7);
    }
}
