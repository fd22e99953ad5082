use super::shooter::{Cooldown, Faction, Shooter, ShooterId};

/// Absolute position of a formation member: anchor plus the member's fixed offset.
///
/// Pure, so members never accumulate drift however long the anchor moves.
pub fn member_position(anchor: (f32, f32), offset: (f32, f32)) -> (f32, f32) {
    (anchor.0 + offset.0, anchor.1 + offset.1)
}

/// Offsets for `rows` x `columns` members, centered on the anchor
pub fn grid_offsets(rows: u16, columns: u16, spacing: f32) -> Vec<(f32, f32)> {
    let center_col = (columns.max(1) - 1) as f32 / 2.0;
    let center_row = (rows.max(1) - 1) as f32 / 2.0;

    (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |col| {
                (
                    (col as f32 - center_col) * spacing,
                    (row as f32 - center_row) * spacing,
                )
            })
        })
        .collect()
}

/// Moving reference point the formation members track.
///
/// The engine moves it and bounces it off the side walls using `half_width`,
/// the horizontal extent of the whole formation around the anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct FormationAnchor {
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub half_width: f32,
}

impl FormationAnchor {
    pub fn new(x: f32, y: f32, velocity_x: f32) -> Self {
        Self {
            x,
            y,
            velocity_x,
            half_width: 0.0,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

/// Group of enemy shooters plus the anchor they follow
#[derive(Debug, Clone)]
pub struct Formation {
    pub anchor: Option<FormationAnchor>,
    pub members: Vec<Shooter>,
    /// Per-member offset captured at creation, parallel to `members`
    offsets: Vec<(f32, f32)>,
    /// Throttles how often the formation as a whole may shoot
    pub volley: Cooldown,
}

impl Formation {
    /// Members placed at `anchor + offset`, following the anchor from then on.
    pub fn anchored(
        mut anchor: FormationAnchor,
        offsets: &[(f32, f32)],
        first_id: u32,
        member_size: f32,
        firing_rate: f64,
        volley_rate: f64,
    ) -> Self {
        let widest = offsets.iter().map(|(dx, _)| dx.abs()).fold(0.0, f32::max);
        anchor.half_width = widest + member_size / 2.0;

        let members = offsets
            .iter()
            .zip(first_id..)
            .map(|(&offset, id)| {
                let (x, y) = member_position(anchor.position(), offset);
                Shooter::new(ShooterId(id), Faction::Enemy, x, y, firing_rate)
            })
            .collect();

        Self {
            anchor: Some(anchor),
            members,
            offsets: offsets.to_vec(),
            volley: Cooldown::new(volley_rate),
        }
    }

    /// Members that hold their initial absolute positions
    pub fn stationary(
        positions: &[(f32, f32)],
        first_id: u32,
        firing_rate: f64,
        volley_rate: f64,
    ) -> Self {
        let members = positions
            .iter()
            .zip(first_id..)
            .map(|(&(x, y), id)| Shooter::new(ShooterId(id), Faction::Enemy, x, y, firing_rate))
            .collect();

        Self {
            anchor: None,
            members,
            offsets: positions.to_vec(),
            volley: Cooldown::new(volley_rate),
        }
    }

    pub fn offsets(&self) -> &[(f32, f32)] {
        &self.offsets
    }

    /// Recompute every member from the live anchor position
    pub fn update_positions(&mut self) {
        let Some(anchor) = &self.anchor else {
            return;
        };
        let anchor = anchor.position();

        for (member, &offset) in self.members.iter_mut().zip(&self.offsets) {
            let (x, y) = member_position(anchor, offset);
            member.x = x;
            member.y = y;
        }
    }

    pub fn alive_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_alive()).count()
    }

    pub fn is_cleared(&self) -> bool {
        self.alive_count() == 0
    }
}
