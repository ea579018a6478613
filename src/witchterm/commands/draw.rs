use crate::commands::{CmdResult, CommandContext};
use crate::error::Result;

pub fn run(ctx: &mut CommandContext<'_>) -> Result<CmdResult> {
    let card = ctx.engine.draw_random()?;
    ctx.display.render(&card);
    Ok(CmdResult::default().with_card(card))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WitchError;
    use crate::test_utils::Fixture;

    #[test]
    fn test_draw_renders_and_returns_card() {
        let mut fx = Fixture::loaded(&["A", "B", "C"]);
        let result = run(&mut fx.ctx()).unwrap();
        let card = result.card.expect("card");
        assert_eq!(fx.display.last.as_ref(), Some(&card));
        assert_eq!(fx.display.renders, 1);
        assert_eq!(fx.engine.current().map(|c| c.name.as_str()), Some(card.name.as_str()));
    }

    #[test]
    fn test_draw_without_catalog() {
        let mut fx = Fixture::unloaded();
        let err = run(&mut fx.ctx()).unwrap_err();
        assert!(matches!(err, WitchError::EmptyCatalog));
        assert_eq!(fx.display.renders, 0);
    }
}
