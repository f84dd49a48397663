use super::{Behavior, Decision, Transition};
use crate::content::rules;
use crate::state::{AgentState, AgentStatus, PuppetTimers, Timers};
use crate::types::{Camera, Location, LogEvent};

/// The music box. Drains on a fixed cadence while boxed, wakes at zero and
/// walks into the office after a grace window. Level only gates whether it
/// runs at all.
#[derive(Debug)]
pub struct Puppet;

impl Behavior for Puppet {
    fn initial_timers(&self) -> Timers {
        Timers::Puppet(PuppetTimers {
            charge: rules::PUPPET_FULL_CHARGE,
            last_discharge: 0,
            woke_at: 0,
            recharge_since: None,
        })
    }

    fn decide(&self, state: &mut AgentState, ctx: &mut Decision<'_>) -> Transition {
        let Timers::Puppet(puppet) = &mut state.timers else {
            return Transition::Stay;
        };
        match state.position {
            Location::Box => {
                if puppet.charge > 0
                    && ctx.now >= puppet.last_discharge + rules::PUPPET_DRAIN_INTERVAL_MS
                {
                    puppet.charge = puppet.charge.saturating_sub(rules::PUPPET_DRAIN);
                    puppet.last_discharge += rules::PUPPET_DRAIN_INTERVAL_MS;
                }
                if puppet.charge == 0 {
                    puppet.woke_at = ctx.now;
                    puppet.recharge_since = None;
                    ctx.events.push(LogEvent::PuppetWoke);
                    return Transition::Advance(Location::Awake);
                }

                let winding =
                    ctx.signals.recharge_requested && ctx.signals.observing(Camera::MUSIC_BOX);
                if winding {
                    let since = *puppet.recharge_since.get_or_insert(ctx.now);
                    if ctx.now - since >= ctx.timings.recharge_cue_ms {
                        puppet.charge = (puppet.charge + rules::PUPPET_RECHARGE)
                            .min(rules::PUPPET_FULL_CHARGE);
                        puppet.recharge_since = Some(ctx.now);
                        ctx.events.push(LogEvent::MusicBoxRecharged { charge: puppet.charge });
                    }
                } else {
                    puppet.recharge_since = None;
                }
                state.status = AgentStatus::Draining { charge: puppet.charge };
                Transition::Stay
            }
            Location::Awake => {
                let awake_for = ctx.now.saturating_sub(puppet.woke_at);
                if awake_for >= rules::PUPPET_AWAKE_MS {
                    return Transition::Breach;
                }
                let remaining_ms = rules::PUPPET_AWAKE_MS - awake_for;
                state.status = AgentStatus::Awake { remaining_ms };
                Transition::Stay
            }
            _ => Transition::Stay,
        }
    }

    fn arrived(&self, state: &mut AgentState, to: Location, _now: u64) {
        if to == Location::Awake {
            state.status = AgentStatus::Awake { remaining_ms: rules::PUPPET_AWAKE_MS };
        }
    }
}
