/*!
# Instruction Protocol Reference

Compiled script and host tools talk to the robot with short text
instructions. Each is a group letter, an operation letter and its
operands, ended by a carriage return (`0x0D`). Letters are not case
sensitive. An instruction longer than 60 bytes is discarded.

With diagnostic bit 1 set (`IM1`) every instruction answers
`XYOK`, or `XYFail: reason` when its operands are wrong. Other
answers shown below are always written.

## Information

| Instruction | Action |
|-------------|--------|
| `IV` | Writes the version line |
| `ID` | Writes the distance sensor reading |
| `IS` | Writes the program state and the diagnostic level |
| `IMn` | Sets the diagnostic level, a sum of 1 confirmations, 2 statement offsets, 4 download echo and 8 download listing |
| `IP` | Lists the stored program |

Program states are 0 stopped, 1 paused, 2 active, 3 awaiting motors and
4 awaiting a delay.

## Motion

| Instruction | Action |
|-------------|--------|
| `MFd[,t]` | Forward `d`, optionally in `t` tenths of a second |
| `MRa[,t]` | Rotate `a` degrees |
| `MAr,a[,t]` | Arc of radius `r` through `a` degrees |
| `MMl,r[,t]` | Drive the wheels different distances |
| `MWl,r,s` | Configure wheel diameters and spacing |
| `MV` | Writes the wheel configuration |
| `MC` | Writes `MCMove` or `MCstopped` |
| `MS` | Stops the motors |

## Lights

| Instruction | Action |
|-------------|--------|
| `PCr,g,b` | Candle flicker in a colour |
| `PNc` | Named colour, one of `rgbcmywk` |
| `PXs,r,g,b` | Fade to a colour at speed 1 (slow) to 20 (fast) |
| `PFn` | Flicker speed |
| `PIn,r,g,b` | Sets one pixel |
| `PO` | All off |
| `PR` | Random colours |
| `PA` `PS` | Flicker on, flicker off |

## Program control

| Instruction | Action |
|-------------|--------|
| `CLname` | Declares a label |
| `CJname` | Jumps to a label |
| `CIname` | Jumps if the motors are stopped |
| `CCname` | Jumps on a coin toss |
| `CMd,name` | Jumps if the distance sensor reads less than `d` |
| `CTa<b,name` | Jumps if the condition holds |
| `CFa<b,name` | Jumps if the condition fails |
| `CA` | Waits for the motors to stop |
| `CDt` | Waits `t` tenths of a second |

Labels are searched from the start of the running program and the first
declaration wins. The waits only take effect in a running program.

## Remote control

| Instruction | Action |
|-------------|--------|
| `RM` | Begins a download. Following lines are stored, not run, until a line starting `RX` (keep and start) or `RA` (discard) |
| `RS` | Starts the stored program |
| `RH` | Halts the program and the motors |
| `RP` | Pauses the program |
| `RR` | Resumes a paused program |
| `RC` | Halts and erases the stored program |

## Variables, sound and output

| Instruction | Action |
|-------------|--------|
| `VC` | Clears all variables |
| `VSname=value` | Assigns a variable |
| `VVname` | Writes a variable |
| `STf,d,W` or `STf,d,N` | Plays a tone; `W` makes a running program wait for it |
| `WTtext` | Writes text |
| `WL` | Writes a new line |
| `WVvalue` | Writes a value |

Lines starting with `#` are ignored.
*/
