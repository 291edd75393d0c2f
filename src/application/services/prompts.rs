//! Instruction templates sent to the text-generation model.

const TRANSCRIPT_PLACEHOLDER: &str = "{transcript}";

pub const SUMMARY_TEMPLATE: &str = "\
You are an assistant specialized in analyzing audio transcriptions from nurses and \
generating concise, well-structured patient health reports.

Input: a transcription describing the patient's current health status.

Expected output:
1. A clear and organized summary of the patient's health report, emphasizing key details.
2. Natural language that keeps every important detail.
3. No information that is not explicitly present in the transcription.
4. A single plain paragraph with no markdown, bullet symbols or escaped line breaks. \
Start directly with the summary, without a heading such as \"Summary:\".

Transcription provided:
{transcript}

Example output:
The patient, Jane Smith, aged 54, was admitted on December 10th for severe headaches and \
dizziness. Initial vitals included a blood pressure of 140/90 and a heart rate of 85 bpm. \
A CT scan indicated mild cerebral edema. By December 11th the headache intensity had \
reduced, though dizziness persisted. Continued NSAID treatment and physical therapy were \
recommended. Discharge is tentatively planned for December 15th, pending results.";

pub const NARRATIVE_TEMPLATE: &str = "\
You are a nurse writing a comprehensive narrative for a patient's health record.

Input: several entries describing the patient's health at different times of a visit.

Expected output:
1. One cohesive narrative that combines all entries.
2. Natural language with a clear flow.
3. Details in chronological order, without redundancy.
4. No information that is not explicitly present in the entries.
5. Plain paragraphs with no markdown, bullet symbols or escaped line breaks.
6. A structure similar to this example:

07:00 Skilled nurse arrives at home and receives patient from outgoing nurse who stated \
that patient had a good day. Start of shift vital signs checked and documented, family and \
patient covid assessment done according to CDC guidelines, patient and nurse temperature \
monitored and recorded, all within normal limits. Head to toe assessment done, patient \
remains stable, lung sounds present and clear. At 14:05 patient had a large soft stool, \
incontinent care done and new diaper worn. At 15:00 due medication given, patient \
continues feeding, will continue monitoring. Patient repositioned every 2 hours to \
maintain skin integrity. No new concern at this time, patient remains stable. End of \
shift report given to incoming nurse.";

/// Builds the summary instruction with the transcript embedded.
pub fn summary_prompt(transcript: &str) -> String {
    SUMMARY_TEMPLATE.replace(TRANSCRIPT_PLACEHOLDER, transcript)
}
