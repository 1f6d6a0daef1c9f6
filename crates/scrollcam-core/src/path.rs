//! The directed path hero → shot₀ → … → shotₙ₋₁ → footer.
//!
//! Each leg carries the two framings it moves between. Whether a shot is the
//! last one is decided here, once, so nothing downstream has to look ahead.

use crate::catalog::{Shot, SubShot};
use crate::segment::SegmentKind;
use crate::viewport::SectionId;

/// Which way a leg moves its section's caption.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptionMove {
    In,
    Out,
}

/// One edge of the path, in model-normalized coordinates.
///
/// `None` framings mean the leg holds the camera still.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Leg {
    pub kind: SegmentKind,
    pub section: SectionId,
    pub camera: Option<(SubShot, SubShot)>,
    pub caption: Option<CaptionMove>,
}

/// Build the ordered legs for a catalog.
pub fn legs(shots: &[Shot], hero: SubShot, footer: SubShot) -> Vec<Leg> {
    let mut out = Vec::with_capacity(shots.len() * 2 + 3);
    out.push(Leg {
        kind: SegmentKind::HeroHold,
        section: SectionId::Hero,
        camera: None,
        caption: Some(CaptionMove::Out),
    });

    if let Some(first) = shots.first() {
        out.push(Leg {
            kind: SegmentKind::Enter,
            section: SectionId::Hero,
            camera: Some((hero, first.wide)),
            caption: None,
        });
    }

    // Each shot paired with the wide framing the handoff lands on: the next
    // shot's, or its own for the last one.
    let landings = shots
        .iter()
        .skip(1)
        .map(|next| next.wide)
        .chain(shots.last().map(|last| last.wide));
    for (i, (shot, landing)) in shots.iter().zip(landings).enumerate() {
        out.push(Leg {
            kind: SegmentKind::PushIn(i),
            section: SectionId::Shot(i),
            camera: Some((shot.wide, shot.close)),
            caption: Some(CaptionMove::In),
        });
        out.push(Leg {
            kind: SegmentKind::Handoff(i),
            section: SectionId::Shot(i),
            camera: Some((shot.close, landing)),
            caption: Some(CaptionMove::Out),
        });
    }

    let footer_from = shots.last().map_or(hero, |last| last.wide);
    out.push(Leg {
        kind: SegmentKind::Footer,
        section: SectionId::Footer,
        camera: Some((footer_from, footer)),
        caption: None,
    });
    out
}
